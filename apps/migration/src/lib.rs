//! Schema migrations for the folio database.

pub use sea_orm_migration::prelude::*;

mod m20250620_000001_create_blog_posts;
mod m20250620_000002_create_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250620_000001_create_blog_posts::Migration),
            Box::new(m20250620_000002_create_contacts::Migration),
        ]
    }
}
