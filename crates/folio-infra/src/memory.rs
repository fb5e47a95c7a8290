//! In-memory repositories - used as fallback when no database is configured,
//! and as the test double for service-level tests.
//!
//! Data is lost on process restart. Slug uniqueness is enforced on insert,
//! mirroring the unique index of the real store.

use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::{BlogPost, Contact};
use folio_core::error::RepoError;
use folio_core::ports::{BlogPostRepository, ContactRepository};

#[derive(Default)]
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn carries_tag(post: &BlogPost, tag: Option<&str>) -> bool {
    tag.is_none_or(|tag| post.tags.iter().any(|t| t == tag))
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogRepository {
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint("Slug already exists".to_string()));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .find(|p| p.is_published && p.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().any(|p| p.slug == slug))
    }

    async fn list_published(
        &self,
        tag: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let mut matching: Vec<BlogPost> = posts
            .iter()
            .filter(|p| p.is_published && carries_tag(p, tag))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_published(&self, tag: Option<&str>) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.is_published && carries_tag(p, tag))
            .count() as u64)
    }

    async fn distinct_tags(&self) -> Result<Vec<String>, RepoError> {
        let posts = self.posts.read().await;
        let tags: BTreeSet<String> = posts
            .iter()
            .filter(|p| p.is_published)
            .flat_map(|p| p.tags.iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let position = posts.iter().position(|p| p.id == id);
        Ok(position.map(|i| posts.remove(i)))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let deleted = posts.len() as u64;
        posts.clear();
        Ok(deleted)
    }
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: Contact) -> Result<Contact, RepoError> {
        let mut contacts = self.contacts.write().await;
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Contact>, RepoError> {
        let contacts = self.contacts.read().await;
        let mut all: Vec<Contact> = contacts.iter().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.contacts.read().await.len() as u64)
    }
}
