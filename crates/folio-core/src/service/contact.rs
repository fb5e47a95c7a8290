use std::sync::Arc;

use crate::domain::{Contact, ContactSubmission};
use crate::error::DomainError;
use crate::page::{Page, Pagination};
use crate::ports::{ContactNotifier, ContactRepository};
use crate::validate;

use super::check_page_window;

/// Hard cap on the contact listing page size, regardless of the request.
pub const MAX_CONTACT_PAGE_SIZE: u64 = 50;

/// Contact-form pipeline: validate, persist, then notify best-effort.
#[derive(Clone)]
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    notifier: Arc<dyn ContactNotifier>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { repo, notifier }
    }

    /// Validate and persist a submission, then send the owner notice and the
    /// sender auto-reply. Notification failures are logged and swallowed;
    /// the submission succeeds once the record is stored.
    pub async fn submit(
        &self,
        submission: ContactSubmission,
        source_ip: Option<String>,
    ) -> Result<Contact, DomainError> {
        let submission = submission.normalized();
        let errors = validate::contact_submission(&submission);
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let saved = self.repo.insert(Contact::new(submission, source_ip)).await?;

        if let Err(err) = self.notifier.notify(&saved).await {
            tracing::warn!(contact_id = %saved.id, error = %err, "contact notification failed");
        }

        Ok(saved)
    }

    /// All contacts, newest first, page size capped at
    /// [`MAX_CONTACT_PAGE_SIZE`].
    pub async fn list_all(&self, page: u64, limit: u64) -> Result<Page<Contact>, DomainError> {
        check_page_window(page, limit)?;
        let limit = limit.min(MAX_CONTACT_PAGE_SIZE);
        let skip = (page - 1).saturating_mul(limit);

        let items = self.repo.list(skip, limit).await?;
        let total_items = self.repo.count().await?;

        Ok(Page {
            items,
            pagination: Pagination::new(page, limit, total_items),
        })
    }
}
