use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact entity - one contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub ip_address: Option<String>,
}

/// Raw contact-form input, normalized and validated before persistence.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Trim every text field and lowercase the email address.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

impl Contact {
    /// Create a new unread contact record stamped with the current time.
    pub fn new(submission: ContactSubmission, ip_address: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            created_at: Utc::now(),
            is_read: false,
            ip_address,
        }
    }
}
