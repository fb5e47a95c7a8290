use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Contact;

/// Outbound notification capability for contact submissions.
///
/// An implementation delivers both the owner notice and the sender
/// auto-reply. Callers treat the whole capability as best-effort: a
/// [`NotifyError`] is logged and swallowed at the call site, never surfaced
/// to the submitter and never rolling back the stored record.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, contact: &Contact) -> Result<(), NotifyError>;
}

/// Notification failures.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(String),

    #[error("failed to build message: {0}")]
    Message(String),

    #[error("transport failure: {0}")]
    Transport(String),
}
