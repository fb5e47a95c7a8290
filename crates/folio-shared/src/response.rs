//! The API error body.
//!
//! Every error response carries `{ message, errors? }`, where `errors` is
//! the per-field detail of a validation failure.

use serde::{Deserialize, Serialize};

use folio_core::error::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_key_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorBody::new("Blog post not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Blog post not found" }));
    }

    #[test]
    fn field_errors_serialize_inline() {
        let body = ErrorBody::new("Validation failed")
            .with_errors(vec![FieldError::new("message", "too short")]);
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["errors"][0]["field"], "message");
    }
}
