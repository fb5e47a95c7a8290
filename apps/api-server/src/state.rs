//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::{BlogPostRepository, ContactNotifier, ContactRepository};
use folio_core::service::{BlogService, ContactService};
use folio_infra::mail::NoopNotifier;
use folio_infra::memory::{InMemoryBlogRepository, InMemoryContactRepository};

use crate::config::AppConfig;

/// Shared application state. Services are stateless between requests; the
/// only shared mutable state lives in the store behind them.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub contact: ContactService,
    pub admin_key: Option<String>,
    pub db_connected: bool,
}

impl AppState {
    /// Assemble services from explicit parts. Tests use this directly with
    /// the in-memory adapters.
    pub fn with_parts(
        blog_repo: Arc<dyn BlogPostRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        notifier: Arc<dyn ContactNotifier>,
        admin_key: Option<String>,
        db_connected: bool,
    ) -> Self {
        Self {
            blog: BlogService::new(blog_repo),
            contact: ContactService::new(contact_repo, notifier),
            admin_key,
            db_connected,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let notifier = Self::notifier(config);

        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match folio_infra::database::connect(db_config).await {
                Ok(conn) => {
                    tracing::info!("Application state initialized");
                    return Self::with_parts(
                        Arc::new(folio_infra::PostgresBlogRepository::new(conn.clone())),
                        Arc::new(folio_infra::PostgresContactRepository::new(conn)),
                        notifier,
                        config.admin_key.clone(),
                        true,
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        Self::with_parts(
            Arc::new(InMemoryBlogRepository::new()),
            Arc::new(InMemoryContactRepository::new()),
            notifier,
            config.admin_key.clone(),
            false,
        )
    }

    #[cfg_attr(not(feature = "smtp"), allow(unused_variables))]
    fn notifier(config: &AppConfig) -> Arc<dyn ContactNotifier> {
        #[cfg(feature = "smtp")]
        if let Some(smtp) = &config.smtp {
            match folio_infra::SmtpNotifier::new(smtp) {
                Ok(notifier) => return Arc::new(notifier),
                Err(e) => {
                    tracing::error!(
                        "Failed to configure SMTP notifier: {}. Notifications disabled.",
                        e
                    );
                }
            }
        }

        Arc::new(NoopNotifier)
    }
}
