use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// The response layer converts these into actual HTTP responses, keeping
/// domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> http::StatusCode;

    /// Machine-readable error type (e.g. `not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Named error kinds, one per 4xx/5xx status a handler commonly raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    Gone,
    TooManyRequests,
    ServerError,
    NotImplemented,
    ServiceUnavailable,
}

impl ErrorKind {
    /// Status fixed for this kind
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BadRequest,
            Self::Unauthorized => StatusCode::Unauthorized,
            Self::Forbidden => StatusCode::Forbidden,
            Self::NotFound => StatusCode::NotFound,
            Self::MethodNotAllowed => StatusCode::MethodNotAllowed,
            Self::Conflict => StatusCode::Conflict,
            Self::Gone => StatusCode::Gone,
            Self::TooManyRequests => StatusCode::TooManyRequests,
            Self::ServerError => StatusCode::ServerError,
            Self::NotImplemented => StatusCode::NotImplemented,
            Self::ServiceUnavailable => StatusCode::ServiceUnavailable,
        }
    }

    /// Kind whose fixed status equals `code`, if any
    #[must_use]
    pub const fn from_status(code: u16) -> Option<Self> {
        match StatusCode::from_code(code) {
            Some(StatusCode::BadRequest) => Some(Self::BadRequest),
            Some(StatusCode::Unauthorized) => Some(Self::Unauthorized),
            Some(StatusCode::Forbidden) => Some(Self::Forbidden),
            Some(StatusCode::NotFound) => Some(Self::NotFound),
            Some(StatusCode::MethodNotAllowed) => Some(Self::MethodNotAllowed),
            Some(StatusCode::Conflict) => Some(Self::Conflict),
            Some(StatusCode::Gone) => Some(Self::Gone),
            Some(StatusCode::TooManyRequests) => Some(Self::TooManyRequests),
            Some(StatusCode::ServerError) => Some(Self::ServerError),
            Some(StatusCode::NotImplemented) => Some(Self::NotImplemented),
            Some(StatusCode::ServiceUnavailable) => Some(Self::ServiceUnavailable),
            _ => None,
        }
    }

    /// Snake-case name used as the machine-readable error type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Build an error of this kind
    #[must_use]
    pub fn error(self, message: Option<String>) -> TypedError {
        TypedError::new(self.status().code(), message)
    }
}

/// Error raised by a handler that already knows its HTTP status
///
/// The status is fixed at construction. Any integer is accepted, including
/// values outside the catalog; they pass through translation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or_default())]
pub struct TypedError {
    status: u16,
    message: Option<String>,
}

macro_rules! named_constructors {
    ($($fn_name:ident => $kind:ident),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($kind), "` error with a message")]
            #[must_use]
            pub fn $fn_name(message: impl Into<String>) -> Self {
                ErrorKind::$kind.error(Some(message.into()))
            }
        )+
    };
}

impl TypedError {
    #[must_use]
    pub const fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    named_constructors! {
        bad_request => BadRequest,
        unauthorized => Unauthorized,
        forbidden => Forbidden,
        not_found => NotFound,
        method_not_allowed => MethodNotAllowed,
        conflict => Conflict,
        gone => Gone,
        too_many_requests => TooManyRequests,
        server_error => ServerError,
        not_implemented => NotImplemented,
        service_unavailable => ServiceUnavailable,
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Named kind, when the status matches one
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_status(self.status)
    }

    /// Split into status and message
    #[must_use]
    pub fn into_parts(self) -> (u16, Option<String>) {
        (self.status, self.message)
    }
}

impl From<ErrorKind> for TypedError {
    fn from(kind: ErrorKind) -> Self {
        kind.error(None)
    }
}

impl HttpError for TypedError {
    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(self.status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        self.kind().map_or("error", ErrorKind::as_str)
    }

    fn client_message(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}
