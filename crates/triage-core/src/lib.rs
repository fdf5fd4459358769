//! Status catalog and typed HTTP errors

mod error;
mod status;

pub use error::{ErrorKind, HttpError, TypedError};
pub use status::{StatusCode, UnknownStatus};
