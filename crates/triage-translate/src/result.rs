use serde::{Deserialize, Serialize};
use triage_core::StatusCode;

/// Normalized outcome of translating a failure
///
/// `status` is the HTTP status line; `message` and `cause` form the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl TranslationResult {
    pub fn new(status: impl Into<u16>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: Some(message.into()),
            cause: None,
        }
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Catalog entry for the status, if it has one
    #[must_use]
    pub const fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_code(self.status)
    }
}
