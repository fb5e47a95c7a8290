//! HTTP handlers and route configuration.

mod blog;
mod contact;
mod health;

use actix_web::web;
use serde::Deserialize;

use folio_core::service::DEFAULT_PAGE_SIZE;

/// Configure all application routes.
///
/// Literal segments (`/tags/all`, `/tag/{tag}`, `/clear/all`) are registered
/// before the `{slug}`/`{id}` catch-alls so they resolve first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Blog routes
            .service(
                web::scope("/blog")
                    .route("", web::get().to(blog::list))
                    .route("", web::post().to(blog::create))
                    .route("/clear/all", web::delete().to(blog::clear_all))
                    .route("/tags/all", web::get().to(blog::list_tags))
                    .route("/tag/{tag}", web::get().to(blog::list_by_tag))
                    .route("/{slug}", web::get().to(blog::get_by_slug))
                    .route("/{id}", web::delete().to(blog::delete)),
            )
            // Contact routes
            .service(
                web::scope("/contact")
                    .route("", web::post().to(contact::submit))
                    .route("", web::get().to(contact::list)),
            ),
    );
}

/// Common `?page=&limit=` query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<u64>,
    limit: Option<u64>,
}

impl ListQuery {
    /// Missing parameters fall back to the first page of the default size;
    /// explicit zeroes are rejected downstream by the services.
    fn window(&self) -> (u64, u64) {
        (
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
