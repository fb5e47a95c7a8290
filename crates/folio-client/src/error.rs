//! Typed client errors.

use thiserror::Error;

/// Errors surfaced by the API gateway.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server answered with a non-success status; carries the HTTP
    /// status and the server's `{ message }` when it sent one.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a usable response (connect failure,
    /// timeout, body decode failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiClientError {
    /// Transient server-side failures (5xx) are the only class worth
    /// retrying; everything else is deterministic.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiClientError::Api { status, .. } if *status >= 500)
    }
}
