use std::error::Error as StdError;

use serde_json::Value;
use thiserror::Error;
use triage_core::TypedError;

use crate::table::CAST_ERROR;

/// Name given to errors that carry no more specific name
pub const GENERIC_ERROR: &str = "Error";

/// Error produced by a schema or data validation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error with an explicit name, looked up in the other-errors table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct NamedError {
    name: String,
    message: String,
}

impl NamedError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure caught by a handler, ready to be translated
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Error that already knows its HTTP status
    Typed(TypedError),
    /// Rejected input from a validation layer
    Validation(ValidationError),
    /// Any other error, identified by name
    Error { name: String, message: String },
    /// A value that is not an error at all
    Opaque(Value),
}

impl Failure {
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Short label for logs
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Typed(_) => "typed",
            Self::Validation(_) => "validation",
            Self::Error { .. } => "error",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Classify an arbitrary error by what it can be downcast to
    ///
    /// Checks run in translation precedence: typed, then validation, then
    /// named. Failed primitive conversions are named [`CAST_ERROR`]; any
    /// other error is named [`GENERIC_ERROR`] and keeps its display text.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        if let Some(typed) = err.downcast_ref::<TypedError>() {
            return Self::Typed(typed.clone());
        }

        if let Some(message) = validation_message(err) {
            return Self::Validation(ValidationError::new(message));
        }

        if let Some(named) = err.downcast_ref::<NamedError>() {
            return Self::error(named.name(), named.message());
        }

        let name = if is_cast_failure(err) { CAST_ERROR } else { GENERIC_ERROR };
        Self::error(name, err.to_string())
    }
}

fn validation_message(err: &(dyn StdError + 'static)) -> Option<String> {
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return Some(validation.message().to_owned());
    }

    // Syntax and EOF errors are malformed input rather than failed validation
    if let Some(json) = err.downcast_ref::<serde_json::Error>()
        && json.is_data()
    {
        return Some(json.to_string());
    }

    rejection_message(err)
}

#[cfg(feature = "http")]
fn rejection_message(err: &(dyn StdError + 'static)) -> Option<String> {
    use axum::extract::rejection::JsonRejection;

    err.downcast_ref::<JsonRejection>().map(JsonRejection::body_text)
}

#[cfg(not(feature = "http"))]
fn rejection_message(_err: &(dyn StdError + 'static)) -> Option<String> {
    None
}

fn is_cast_failure(err: &(dyn StdError + 'static)) -> bool {
    err.is::<std::num::ParseIntError>()
        || err.is::<std::num::ParseFloatError>()
        || err.is::<std::num::TryFromIntError>()
        || err.is::<std::str::ParseBoolError>()
        || err.is::<std::char::ParseCharError>()
}

impl From<TypedError> for Failure {
    fn from(err: TypedError) -> Self {
        Self::Typed(err)
    }
}

impl From<triage_core::ErrorKind> for Failure {
    fn from(kind: triage_core::ErrorKind) -> Self {
        Self::Typed(kind.into())
    }
}

impl From<ValidationError> for Failure {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<NamedError> for Failure {
    fn from(err: NamedError) -> Self {
        Self::Error {
            name: err.name,
            message: err.message,
        }
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Self::Opaque(value)
    }
}

impl From<&str> for Failure {
    fn from(value: &str) -> Self {
        Self::Opaque(Value::String(value.to_owned()))
    }
}

impl From<String> for Failure {
    fn from(value: String) -> Self {
        Self::Opaque(Value::String(value))
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        // anyhow downcasts see through `.context(...)` layers
        if let Some(typed) = err.downcast_ref::<TypedError>() {
            return Self::Typed(typed.clone());
        }

        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            return Self::Validation(validation.clone());
        }

        // Foreign error types sit below any context, so walk the chain
        if let Some(message) = err.chain().find_map(validation_message) {
            return Self::Validation(ValidationError::new(message));
        }

        if let Some(named) = err.downcast_ref::<NamedError>() {
            return named.clone().into();
        }

        let name = if err.chain().any(is_cast_failure) { CAST_ERROR } else { GENERIC_ERROR };
        Self::error(name, err.to_string())
    }
}
