//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_core::domain::{BlogPost, Contact, ContactSubmission, NewBlogPost};
use folio_core::page::Pagination;

/// A blog post on the wire. Listing payloads omit `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDto {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub excerpt: String,
    pub slug: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub read_time: u32,
}

impl BlogPostDto {
    /// Listing view: everything but the content body.
    pub fn summary(post: BlogPost) -> Self {
        Self {
            content: None,
            ..Self::from(post)
        }
    }
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: Some(post.content),
            excerpt: post.excerpt,
            slug: post.slug,
            author: post.author,
            tags: post.tags,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            is_published: post.is_published,
            featured_image: post.featured_image,
            read_time: post.read_time,
        }
    }
}

/// Request to create a blog post. `tags` is required (an empty list is
/// fine); the other optional fields fall back to derivation or defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl From<CreateBlogPostRequest> for NewBlogPost {
    fn from(req: CreateBlogPostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            slug: req.slug,
            author: req.author,
            tags: req.tags,
            is_published: req.is_published,
            featured_image: req.featured_image,
        }
    }
}

/// Contact-form submission payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// A contact record on the wire (admin listing only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            created_at: contact.created_at,
            is_read: contact.is_read,
            ip_address: contact.ip_address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub posts: Vec<BlogPostDto>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogByTagResponse {
    pub posts: Vec<BlogPostDto>,
    pub tag: String,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactDto>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitContactResponse {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub message: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearPostsResponse {
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost::new(folio_core::domain::NewBlogPost {
            title: "Hello World".to_string(),
            content: "body text".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn summary_omits_content_key() {
        let json = serde_json::to_value(BlogPostDto::summary(post())).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["slug"], "hello-world");
    }

    #[test]
    fn full_dto_is_camel_case() {
        let json = serde_json::to_value(BlogPostDto::from(post())).unwrap();
        assert!(json.get("readTime").is_some());
        assert!(json.get("isPublished").is_some());
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("read_time").is_none());
    }

    #[test]
    fn create_request_tolerates_missing_optionals() {
        let req: CreateBlogPostRequest = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C",
            "tags": []
        }))
        .unwrap();
        assert!(req.excerpt.is_none());
        assert!(req.is_published.is_none());
    }
}
