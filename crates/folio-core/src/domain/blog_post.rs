use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::derive::{derive_excerpt, derive_read_time, derive_slug};

/// Byline used when a post is created without an explicit author.
pub const DEFAULT_AUTHOR: &str = "Site Owner";

/// BlogPost entity - a published or draft article.
///
/// Invariants: `slug` is `derive_slug(title)` and unique across all posts;
/// `read_time` is `derive_read_time(content)`; `updated_at` is refreshed on
/// every mutation and never precedes `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub featured_image: Option<String>,
    pub read_time: u32,
}

/// Creation input. Slug, excerpt and read time are derived when absent; a
/// supplied slug is advisory only and re-derived from the title.
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub is_published: Option<bool>,
    pub featured_image: Option<String>,
}

impl BlogPost {
    /// Build a post from validated input, deriving every derived field.
    pub fn new(input: NewBlogPost) -> Self {
        let now = Utc::now();
        let is_published = input.is_published.unwrap_or(true);

        Self {
            id: Uuid::new_v4(),
            slug: derive_slug(&input.title),
            excerpt: input
                .excerpt
                .unwrap_or_else(|| derive_excerpt(&input.content)),
            author: input.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            tags: normalize_tags(input.tags),
            read_time: derive_read_time(&input.content),
            published_at: is_published.then_some(now),
            created_at: now,
            updated_at: now,
            is_published,
            featured_image: input.featured_image,
            title: input.title,
            content: input.content,
        }
    }

    /// Change the title; the slug follows it.
    pub fn set_title(&mut self, title: String) {
        self.slug = derive_slug(&title);
        self.title = title;
        self.touch();
    }

    /// Change the content; the read time follows it.
    pub fn set_content(&mut self, content: String) {
        self.read_time = derive_read_time(&content);
        self.content = content;
        self.touch();
    }

    /// Mark the post published. The publication timestamp is set once and
    /// survives later edits.
    pub fn publish(&mut self) {
        self.is_published = true;
        if self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Trim and lowercase tags, dropping ones that end up empty.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            content: content.to_string(),
            ..NewBlogPost::default()
        }
    }

    #[test]
    fn new_post_derives_slug_excerpt_and_read_time() {
        let post = BlogPost::new(input("Hello World!", "some words here"));
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.excerpt, "some words here...");
        assert_eq!(post.read_time, 1);
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert!(post.is_published);
        assert!(post.published_at.is_some());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn draft_has_no_publication_timestamp() {
        let post = BlogPost::new(NewBlogPost {
            is_published: Some(false),
            ..input("Draft", "body")
        });
        assert!(!post.is_published);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn set_title_recomputes_slug() {
        let mut post = BlogPost::new(input("First Title", "body"));
        post.set_title("Second Title".to_string());
        assert_eq!(post.slug, "second-title");
        assert!(post.updated_at >= post.created_at);
    }

    #[test]
    fn set_content_recomputes_read_time() {
        let mut post = BlogPost::new(input("Title", "short"));
        post.set_content(vec!["word"; 450].join(" "));
        assert_eq!(post.read_time, 3);
    }

    #[test]
    fn publish_sets_timestamp_only_once() {
        let mut post = BlogPost::new(NewBlogPost {
            is_published: Some(false),
            ..input("Draft", "body")
        });
        post.publish();
        let first = post.published_at;
        assert!(first.is_some());
        post.publish();
        assert_eq!(post.published_at, first);
    }

    #[test]
    fn tags_are_normalized() {
        let post = BlogPost::new(NewBlogPost {
            tags: vec!["  Rust ".to_string(), "WEB".to_string(), "  ".to_string()],
            ..input("Title", "body")
        });
        assert_eq!(post.tags, vec!["rust", "web"]);
    }

    #[test]
    fn supplied_slug_is_overridden_by_derivation() {
        let post = BlogPost::new(NewBlogPost {
            slug: Some("hand-picked".to_string()),
            ..input("Actual Title", "body")
        });
        assert_eq!(post.slug, "actual-title");
    }
}
