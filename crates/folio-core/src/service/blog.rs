use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::{DomainError, RepoError};
use crate::page::{Page, Pagination};
use crate::ports::BlogPostRepository;
use crate::validate;

use super::check_page_window;

/// Page size used when a listing request does not name one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Blog-post lifecycle orchestration over an injected store.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogPostRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    /// Published posts, newest first, optionally filtered by tag.
    pub async fn list_published(
        &self,
        page: u64,
        limit: u64,
        tag: Option<&str>,
    ) -> Result<Page<BlogPost>, DomainError> {
        check_page_window(page, limit)?;
        let skip = (page - 1).saturating_mul(limit);

        let items = self.repo.list_published(tag, skip, limit).await?;
        let total_items = self.repo.count_published(tag).await?;

        Ok(Page {
            items,
            pagination: Pagination::new(page, limit, total_items),
        })
    }

    /// A single published post with its full content.
    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, DomainError> {
        self.repo
            .find_published_by_slug(slug)
            .await?
            .ok_or(DomainError::NotFound { entity: "Blog post" })
    }

    /// Sorted distinct tags across published posts.
    pub async fn list_tags(&self) -> Result<Vec<String>, DomainError> {
        let mut tags = self.repo.distinct_tags().await?;
        tags.sort();
        tags.dedup();
        Ok(tags)
    }

    /// Create a post. The slug is derived from the title; a duplicate slug
    /// is a conflict whether caught by the pre-check or, for a lost race, by
    /// the store's unique index.
    pub async fn create(&self, input: NewBlogPost) -> Result<BlogPost, DomainError> {
        let errors = validate::new_blog_post(&input);
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let post = BlogPost::new(input);
        if self.repo.slug_exists(&post.slug).await? {
            return Err(DomainError::Duplicate("Slug already exists".to_string()));
        }

        self.repo.insert(post).await.map_err(|err| match err {
            RepoError::Constraint(_) => DomainError::Duplicate("Slug already exists".to_string()),
            other => other.into(),
        })
    }

    /// Delete by id, returning the deleted post's title for confirmation.
    pub async fn delete(&self, id: Uuid) -> Result<String, DomainError> {
        self.repo
            .delete_by_id(id)
            .await?
            .map(|post| post.title)
            .ok_or(DomainError::NotFound { entity: "Blog post" })
    }

    /// Delete every post, returning the count. Irreversible, and gated by
    /// the same admin credential as individual deletion.
    pub async fn clear_all(&self) -> Result<u64, DomainError> {
        Ok(self.repo.delete_all().await?)
    }
}
