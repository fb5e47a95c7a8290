//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgFunc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, DbConn, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Statement,
};
use uuid::Uuid;

use folio_core::domain::{BlogPost, Contact};
use folio_core::error::RepoError;
use folio_core::ports::{BlogPostRepository, ContactRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::entity::contact::{self, Entity as ContactEntity};

/// PostgreSQL blog-post repository. Slug uniqueness is guaranteed by the
/// unique index on `blog_posts.slug`; a violated insert surfaces as
/// `RepoError::Constraint`.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn published(tag: Option<&str>) -> Select<BlogPostEntity> {
        let mut query = BlogPostEntity::find().filter(blog_post::Column::IsPublished.eq(true));
        if let Some(tag) = tag {
            // tag membership: $tag = ANY(tags)
            query = query
                .filter(Expr::val(tag).eq(PgFunc::any(Expr::col(blog_post::Column::Tags))));
        }
        query
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogRepository {
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let model = blog_post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("duplicate") || err_str.contains("unique") {
                    RepoError::Constraint("Slug already exists".to_string())
                } else {
                    RepoError::Query(err_str)
                }
            })?;

        Ok(model.into())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .filter(blog_post::Column::IsPublished.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let count = BlogPostEntity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(count > 0)
    }

    async fn list_published(
        &self,
        tag: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<BlogPost>, RepoError> {
        let result = Self::published(tag)
            .order_by_desc(blog_post::Column::PublishedAt)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_published(&self, tag: Option<&str>) -> Result<u64, RepoError> {
        Self::published(tag)
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn distinct_tags(&self) -> Result<Vec<String>, RepoError> {
        let rows = self
            .db
            .query_all(Statement::from_string(
                DbBackend::Postgres,
                "SELECT DISTINCT unnest(tags) AS tag FROM blog_posts WHERE is_published = TRUE"
                    .to_owned(),
            ))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| row.try_get::<String>("", "tag"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(model.into()))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// PostgreSQL contact repository.
pub struct PostgresContactRepository {
    db: DbConn,
}

impl PostgresContactRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: Contact) -> Result<Contact, RepoError> {
        let model = contact::ActiveModel::from(contact)
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Contact>, RepoError> {
        let result = ContactEntity::find()
            .order_by_desc(contact::Column::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        ContactEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}
