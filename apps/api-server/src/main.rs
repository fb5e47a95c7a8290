//! # Folio API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpResponse, HttpServer, web};
use tracing_actix_web::TracingLogger;

use folio_shared::ErrorBody;

mod config;
mod handlers;
mod middleware;
mod state;

#[cfg(test)]
mod tests;

use config::AppConfig;
use middleware::error::AppError;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();
    middleware::error::set_dev_mode(config.dev_mode);

    if config.admin_key.is_none() {
        tracing::warn!("ADMIN_KEY not set. Admin routes will refuse every request.");
    }

    tracing::info!(
        "Starting Folio API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).await;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .app_data(query_config())
            .configure(handlers::configure_routes)
            .default_service(web::route().to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Malformed JSON bodies answer with the standard error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {err}")).into()
    })
}

/// Malformed query strings answer with the standard error shape.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query string: {err}")).into()
    })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("API endpoint not found"))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,folio_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
