//! Services - stateless request orchestration over the ports.

mod blog;
mod contact;

pub use blog::{BlogService, DEFAULT_PAGE_SIZE};
pub use contact::{ContactService, MAX_CONTACT_PAGE_SIZE};

use crate::error::{DomainError, FieldError};

/// Listing windows are 1-based and non-empty; zero values are rejected
/// rather than clamped.
fn check_page_window(page: u64, limit: u64) -> Result<(), DomainError> {
    let mut errors = Vec::new();
    if page == 0 {
        errors.push(FieldError::new("page", "Page must be a positive integer"));
    }
    if limit == 0 {
        errors.push(FieldError::new("limit", "Limit must be a positive integer"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}
