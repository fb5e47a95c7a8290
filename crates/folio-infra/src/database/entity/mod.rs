//! SeaORM entity models and their domain conversions.

pub mod blog_post;
pub mod contact;
