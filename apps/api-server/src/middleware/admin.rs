//! Admin-capability check: a static shared secret in the `x-admin-key`
//! header, compared against the configured key.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Header carrying the admin credential.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Extractor proving the request carried the configured admin key.
///
/// Every admin route declares this as a parameter, so the check runs
/// independently per operation and before any data access. With no
/// configured key, admin routes refuse every request.
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

impl FromRequest for AdminKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let configured = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.admin_key.as_deref());

        let provided = req
            .headers()
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match (configured, provided) {
            (Some(expected), Some(given)) if expected == given => ready(Ok(AdminKey)),
            _ => ready(Err(AppError::Unauthorized)),
        }
    }
}
