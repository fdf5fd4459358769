use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};
use thiserror::Error;

/// HTTP status codes known to the translator
///
/// The set is closed. Errors may still carry arbitrary integer statuses,
/// but table entries and named error kinds always resolve to one of these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,
    MultipleChoices = 300,
    MovedPermanently = 301,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    Conflict = 409,
    Gone = 410,
    TooManyRequests = 429,
    ServerError = 500,
    NotImplemented = 501,
    ServiceUnavailable = 503,
}

/// Integer status that is not part of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("status {0} is not in the catalog")]
pub struct UnknownStatus(pub u16);

impl StatusCode {
    /// Look up a catalog entry by its integer value
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Integer value of this status
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Symbolic name (e.g. `NotFound`)
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Canonical reason phrase (e.g. `Not Found`)
    #[must_use]
    pub fn reason(self) -> &'static str {
        self.to_http().canonical_reason().unwrap_or_default()
    }

    /// Equivalent `http` crate status
    #[must_use]
    pub fn to_http(self) -> http::StatusCode {
        // Every catalog value lies in 200..=503
        http::StatusCode::from_u16(self.code()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

impl From<StatusCode> for http::StatusCode {
    fn from(status: StatusCode) -> Self {
        status.to_http()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownStatus(code))
    }
}
