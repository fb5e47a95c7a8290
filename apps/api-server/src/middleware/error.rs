//! Error handling - every failure answers `{ message, errors? }`.
//!
//! This is the single top-level handler of the request path: internal
//! detail is logged server-side and replaced with a generic message unless
//! the process runs in development mode.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use folio_core::error::{DomainError, FieldError};
use folio_shared::ErrorBody;

static DEV_MODE: AtomicBool = AtomicBool::new(false);

/// Echo internal error detail to callers. Development only.
pub fn set_dev_mode(enabled: bool) {
    DEV_MODE.store(enabled, Ordering::Relaxed);
}

fn dev_mode() -> bool {
    DEV_MODE.load(Ordering::Relaxed)
}

/// Application-level error type mapped onto the API error body.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Conflict(String),
    Internal(String),
    Validation(Vec<FieldError>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(message) => ErrorBody::new(message.clone()),
            AppError::BadRequest(message) => ErrorBody::new(message.clone()),
            AppError::Unauthorized => ErrorBody::new("Admin authentication required"),
            AppError::Conflict(message) => ErrorBody::new(message.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                if dev_mode() {
                    ErrorBody::new(detail.clone())
                } else {
                    ErrorBody::new("Internal server error")
                }
            }
            AppError::Validation(errors) => {
                ErrorBody::new("Validation failed").with_errors(errors.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity } => AppError::NotFound(format!("{entity} not found")),
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Duplicate(message) => AppError::Conflict(message),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Internal(detail) => AppError::Internal(detail),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
