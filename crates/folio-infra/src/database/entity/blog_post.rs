//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub excerpt: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_published: bool,
    pub featured_image: Option<String>,
    pub read_time: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain post.
impl From<Model> for folio_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            excerpt: model.excerpt,
            slug: model.slug,
            author: model.author,
            tags: model.tags,
            published_at: model.published_at.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            is_published: model.is_published,
            featured_image: model.featured_image,
            read_time: model.read_time.max(1) as u32,
        }
    }
}

/// Conversion from the domain post to a SeaORM ActiveModel.
impl From<folio_core::domain::BlogPost> for ActiveModel {
    fn from(post: folio_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            excerpt: Set(post.excerpt),
            slug: Set(post.slug),
            author: Set(post.author),
            tags: Set(post.tags),
            published_at: Set(post.published_at.map(Into::into)),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            is_published: Set(post.is_published),
            featured_image: Set(post.featured_image),
            read_time: Set(post.read_time as i32),
        }
    }
}
