//! In-process notifiers - the unconfigured fallback and a test recorder.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use folio_core::domain::Contact;
use folio_core::ports::{ContactNotifier, NotifyError};

/// Used when no mail transport is configured: submissions still succeed and
/// nothing is sent.
pub struct NoopNotifier;

#[async_trait]
impl ContactNotifier for NoopNotifier {
    async fn notify(&self, contact: &Contact) -> Result<(), NotifyError> {
        tracing::debug!(contact_id = %contact.id, "mail transport not configured, skipping notification");
        Ok(())
    }
}

/// Records the ids it was asked to notify about; can be built failing to
/// exercise the best-effort contract.
#[derive(Default)]
pub struct RecordingNotifier {
    notified: Mutex<Vec<Uuid>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            notified: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn notified(&self) -> Vec<Uuid> {
        self.notified.lock().await.clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, contact: &Contact) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Transport("injected failure".to_string()));
        }
        self.notified.lock().await.push(contact.id);
        Ok(())
    }
}
