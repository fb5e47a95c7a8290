use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Contact};
use crate::error::RepoError;

/// Blog-post collection operations.
///
/// `insert` must enforce slug uniqueness at the storage layer and report a
/// duplicate as [`RepoError::Constraint`]; the in-process existence check in
/// the service is advisory only and does not close the race.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError>;

    /// Published posts, newest publication first, `skip`/`limit` window,
    /// optionally restricted to posts carrying `tag`.
    async fn list_published(
        &self,
        tag: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<BlogPost>, RepoError>;

    async fn count_published(&self, tag: Option<&str>) -> Result<u64, RepoError>;

    /// Distinct tags across published posts, in no particular order.
    async fn distinct_tags(&self) -> Result<Vec<String>, RepoError>;

    /// Remove a post by id, returning it, or `None` for an unknown id.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Remove every post, returning how many were deleted.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}

/// Contact collection operations.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, contact: Contact) -> Result<Contact, RepoError>;

    /// All contacts, newest first, `skip`/`limit` window.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Contact>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}
