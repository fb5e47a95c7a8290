//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`:
//! Postgres repositories, in-memory fallbacks and mail notifiers.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `minimal` - in-memory implementations only
//! - `postgres` - SeaORM/Postgres repositories
//! - `smtp` - lettre SMTP notifier

pub mod database;
pub mod mail;
pub mod memory;

// Re-exports - In-Memory
pub use mail::{NoopNotifier, RecordingNotifier};
pub use memory::{InMemoryBlogRepository, InMemoryContactRepository};

#[cfg(feature = "postgres")]
pub use database::{PostgresBlogRepository, PostgresContactRepository};

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpNotifier};
