//! Application configuration loaded from environment variables.

use std::env;

use folio_infra::database::DatabaseConfig;

#[cfg(feature = "smtp")]
use folio_infra::SmtpConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Static admin credential. `None` means every admin route refuses.
    pub admin_key: Option<String>,
    #[cfg(feature = "smtp")]
    pub smtp: Option<SmtpConfig>,
    /// Echo internal error detail to callers (APP_ENV=development).
    pub dev_mode: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            admin_key: env::var("ADMIN_KEY").ok().filter(|key| !key.is_empty()),
            #[cfg(feature = "smtp")]
            smtp: Self::smtp_from_env(),
            dev_mode: env::var("APP_ENV").is_ok_and(|v| v == "development"),
        }
    }

    /// SMTP is optional: without credentials the server runs with the no-op
    /// notifier and contact submissions still succeed.
    #[cfg(feature = "smtp")]
    fn smtp_from_env() -> Option<SmtpConfig> {
        let username = env::var("SMTP_USER").ok()?;
        let password = env::var("SMTP_PASS").ok()?;

        Some(SmtpConfig {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            owner_address: env::var("CONTACT_EMAIL").unwrap_or_else(|_| username.clone()),
            from_address: username.clone(),
            username,
            password,
        })
    }
}
