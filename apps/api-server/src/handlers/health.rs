//! Health check endpoint.

use actix_web::{HttpResponse, web};

use folio_shared::dto::HealthResponse;

use crate::state::AppState;

/// Health check endpoint - returns server status and store connectivity.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = if state.db_connected {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: database.to_string(),
    })
}
