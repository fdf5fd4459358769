//! Translate handler failures into HTTP error results
//!
//! A failure is classified, first match wins, as a typed error (status
//! carried through), a validation error (400 with the validator's text as
//! cause), a named error (looked up in [`OtherErrorsTable`], else 500), or
//! an opaque value (bare 500).

mod failure;
#[cfg(feature = "http")]
mod response;
mod result;
mod table;
mod translate;

pub use failure::{Failure, GENERIC_ERROR, NamedError, ValidationError};
#[cfg(feature = "http")]
pub use response::ApiError;
pub use result::TranslationResult;
pub use table::{CAST_ERROR, OtherErrorsTable, TableEntry, TableError};
pub use translate::{SERVER_ERROR_MESSAGE, Translator, VALIDATION_MESSAGE, translate_error};
pub use triage_core::{ErrorKind, HttpError, StatusCode, TypedError};
