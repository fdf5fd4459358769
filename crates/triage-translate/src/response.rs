//! axum integration: render translation results as JSON error responses

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::{Failure, TranslationResult, ValidationError, translate_error};

/// Response body; the status travels on the status line
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

impl IntoResponse for TranslationResult {
    fn into_response(self) -> Response {
        // Integers outside 100..=999 cannot go on the status line
        let status = http::StatusCode::from_u16(self.status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if !allows_body(status) {
            return status.into_response();
        }

        let body = ErrorBody {
            message: self.message,
            cause: self.cause,
        };

        (status, Json(body)).into_response()
    }
}

/// Statuses whose responses must not carry a body
fn allows_body(status: http::StatusCode) -> bool {
    !(status.is_informational() || status == http::StatusCode::NO_CONTENT || status == http::StatusCode::NOT_MODIFIED)
}

/// Handler error that translates whatever it wraps when rendered
///
/// Anything convertible into `anyhow::Error` converts into `ApiError`, so
/// handlers returning `Result<_, ApiError>` can use `?` freely.
#[derive(Debug)]
pub struct ApiError(Failure);

impl ApiError {
    /// Wrap a failure that is not an error type (a bare string, a JSON value)
    pub fn new(failure: impl Into<Failure>) -> Self {
        Self(failure.into())
    }

    #[must_use]
    pub const fn failure(&self) -> &Failure {
        &self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(Failure::from(err.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        translate_error(self.0).into_response()
    }
}

impl From<JsonRejection> for Failure {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::new(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use triage_core::TypedError;

    use super::*;
    use crate::NamedError;

    async fn render(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn result_renders_status_and_body() {
        let result = TranslationResult::new(400_u16, "Validation Error").with_cause("name is required");
        let (status, body) = render(result.into_response()).await;

        assert_eq!(status, 400);
        insta::assert_snapshot!(body, @r#"{"message":"Validation Error","cause":"name is required"}"#);
    }

    #[tokio::test]
    async fn absent_message_renders_empty_object() {
        let result = TranslationResult {
            status: 404,
            message: None,
            cause: None,
        };
        let (status, body) = render(result.into_response()).await;

        assert_eq!(status, 404);
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn bodiless_statuses_render_without_body() {
        for code in [101_u16, 204, 304] {
            let result = TranslationResult::new(code, "ignored");
            let (status, body) = render(result.into_response()).await;

            assert_eq!(status, code);
            assert!(body.is_empty(), "{code} rendered {body}");
        }
    }

    #[tokio::test]
    async fn rejection_behind_context_is_validation() {
        use anyhow::Context;
        use axum::extract::{FromRequest, Request};

        let request = Request::post("/").body(axum::body::Body::from("{}")).unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &()).await.unwrap_err();
        let text = rejection.body_text();

        let err = Err::<(), _>(rejection).context("reading payload").unwrap_err();
        assert_eq!(Failure::from(err), Failure::Validation(ValidationError::new(text)));
    }

    #[tokio::test]
    async fn unrepresentable_status_renders_as_server_error() {
        let (status, _) = render(TranslationResult::new(42_u16, "odd").into_response()).await;
        assert_eq!(status, 500);

        let (status, _) = render(TranslationResult::new(999_u16, "odd").into_response()).await;
        assert_eq!(status, 999);
    }

    #[tokio::test]
    async fn api_error_translates_on_render() {
        let (status, body) = render(ApiError::from(TypedError::gone("archived")).into_response()).await;
        assert_eq!(status, 410);
        insta::assert_snapshot!(body, @r#"{"message":"archived"}"#);

        let (status, body) = render(ApiError::from(NamedError::new("RangeError", "x")).into_response()).await;
        assert_eq!(status, 500);
        insta::assert_snapshot!(body, @r#"{"message":"Server Error x"}"#);

        let (status, body) = render(ApiError::new("boom").into_response()).await;
        assert_eq!(status, 500);
        insta::assert_snapshot!(body, @r#"{"message":"Server Error"}"#);
    }

    #[test]
    fn api_error_keeps_classification() {
        let err = ApiError::from(anyhow::anyhow!("disk full"));
        assert_eq!(err.failure(), &Failure::error("Error", "disk full"));
    }
}
