//! Field validation.
//!
//! Each input type runs an explicit, ordered list of per-field checks that
//! collect into a structured error list; validation runs to completion so
//! callers see every failing field at once, and always before persistence.

use crate::derive::derive_slug;
use crate::domain::{ContactSubmission, NewBlogPost};
use crate::error::FieldError;

/// Checks applied to a blog-post creation input, in field order.
pub fn new_blog_post(input: &NewBlogPost) -> Vec<FieldError> {
    let mut errors = Vec::new();

    length_between(
        &mut errors,
        "title",
        &input.title,
        1,
        200,
        "Title must be between 1-200 characters",
    );
    if !input.title.is_empty() && derive_slug(&input.title).is_empty() {
        errors.push(FieldError::new(
            "title",
            "Title must contain at least one letter or digit",
        ));
    }
    if input.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    }
    if let Some(excerpt) = &input.excerpt {
        if excerpt.chars().count() > 500 {
            errors.push(FieldError::new("excerpt", "Excerpt cannot exceed 500 characters"));
        }
    }
    if let Some(slug) = &input.slug {
        length_between(
            &mut errors,
            "slug",
            slug,
            1,
            100,
            "Slug must be between 1-100 characters",
        );
    }
    if let Some(author) = &input.author {
        length_between(
            &mut errors,
            "author",
            author,
            1,
            100,
            "Author must be between 1-100 characters",
        );
    }

    errors
}

/// Checks applied to a contact submission, in field order.
pub fn contact_submission(input: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    length_between(
        &mut errors,
        "name",
        &input.name,
        2,
        50,
        "Name must be between 2-50 characters",
    );
    if !is_valid_email(&input.email) {
        errors.push(FieldError::new("email", "Please provide a valid email address"));
    }
    length_between(
        &mut errors,
        "subject",
        &input.subject,
        5,
        100,
        "Subject must be between 5-100 characters",
    );
    length_between(
        &mut errors,
        "message",
        &input.message,
        10,
        1000,
        "Message must be between 10-1000 characters",
    );

    errors
}

fn length_between(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    message: &str,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(field, message));
    }
}

/// Basic address shape: a non-empty local part, an `@`, and a domain with a
/// dot separating non-empty segments. Whitespace anywhere disqualifies.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((head, tail)) if !head.is_empty() && !tail.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_contact_passes() {
        let input = contact("Ada", "ada@example.com", "A question", "A long enough message.");
        assert!(contact_submission(&input).is_empty());
    }

    #[test]
    fn short_message_fails_on_message_field() {
        let input = contact("Ada", "ada@example.com", "A question", "hello");
        let errors = contact_submission(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
        assert_eq!(errors[0].message, "Message must be between 10-1000 characters");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let input = contact("A", "not-an-email", "hey", "short");
        let fields: Vec<_> = contact_submission(&input)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@domain."));
        assert!(!is_valid_email("has space@example.com"));
    }

    #[test]
    fn blog_input_requires_title_and_content() {
        let input = NewBlogPost::default();
        let fields: Vec<_> = new_blog_post(&input).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "content"]);
    }

    #[test]
    fn symbol_only_title_is_rejected() {
        let input = NewBlogPost {
            title: "!!!".to_string(),
            content: "body".to_string(),
            ..NewBlogPost::default()
        };
        let errors = new_blog_post(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn oversized_optional_fields_are_rejected() {
        let input = NewBlogPost {
            title: "Fine".to_string(),
            content: "body".to_string(),
            excerpt: Some("x".repeat(501)),
            slug: Some("s".repeat(101)),
            author: Some("a".repeat(101)),
            ..NewBlogPost::default()
        };
        let fields: Vec<_> = new_blog_post(&input).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["excerpt", "slug", "author"]);
    }
}
