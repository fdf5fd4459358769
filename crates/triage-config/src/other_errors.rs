use serde::Deserialize;
use triage_core::StatusCode;

/// Translation for a named error that bypasses the server-error fallback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtherErrorConfig {
    /// Response status, must be in the catalog
    pub status: StatusCode,
    /// Response message sent instead of the error's own text
    pub message: String,
}
