use triage_core::StatusCode;

use crate::{Failure, OtherErrorsTable, TranslationResult};

/// Message for failures rejected by a validation layer
pub const VALIDATION_MESSAGE: &str = "Validation Error";

/// Message, or message prefix, for failures that fall through to a 500
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Translate a failure using the process-wide table
pub fn translate_error(failure: impl Into<Failure>) -> TranslationResult {
    Translator::global().translate(failure)
}

/// Maps failures to HTTP results against a fixed other-errors table
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a OtherErrorsTable,
}

impl Translator<'static> {
    /// Translator backed by [`OtherErrorsTable::global`]
    pub fn global() -> Self {
        Self::new(OtherErrorsTable::global())
    }
}

impl<'a> Translator<'a> {
    #[must_use]
    pub const fn new(table: &'a OtherErrorsTable) -> Self {
        Self { table }
    }

    /// Classify `failure`, first match wins
    ///
    /// 1. typed errors keep their status and message
    /// 2. validation errors become 400 with the validator's text as cause
    /// 3. named errors use their table entry, or a 500 that appends their message
    /// 4. anything else is a bare 500
    pub fn translate(&self, failure: impl Into<Failure>) -> TranslationResult {
        let failure = failure.into();
        let category = failure.category();

        let result = match failure {
            Failure::Typed(err) => {
                let (status, message) = err.into_parts();
                TranslationResult {
                    status,
                    message,
                    cause: None,
                }
            }
            Failure::Validation(err) => {
                TranslationResult::new(StatusCode::BadRequest, VALIDATION_MESSAGE).with_cause(err.message())
            }
            Failure::Error { name, message } => {
                if let Some(entry) = self.table.get(&name) {
                    entry.to_result()
                } else {
                    tracing::warn!(error_name = %name, "unclassified error translated to server error");
                    TranslationResult::new(StatusCode::ServerError, format!("{SERVER_ERROR_MESSAGE} {message}"))
                }
            }
            Failure::Opaque(_) => {
                tracing::warn!("non-error failure translated to server error");
                TranslationResult::new(StatusCode::ServerError, SERVER_ERROR_MESSAGE)
            }
        };

        tracing::debug!(category, status = result.status, "translated failure");

        result
    }
}
