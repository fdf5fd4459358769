//! In-process axum app whose handlers fail in every way the translator handles

use anyhow::Context;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceExt;
use triage_translate::{ApiError, NamedError, TypedError};

#[derive(Debug, Deserialize, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
}

async fn get_user(Path(id): Path<String>) -> Result<Json<User>, ApiError> {
    let id: u32 = id.parse().context("parsing user id")?;

    if id == 0 {
        return Err(TypedError::not_found(format!("user {id} not found")).into());
    }

    Ok(Json(User {
        id,
        name: "ada".to_owned(),
    }))
}

async fn create_user(payload: Result<Json<NewUser>, JsonRejection>) -> Result<Json<User>, ApiError> {
    let Json(new_user) = payload?;

    if new_user.name == "root" {
        return Err(TypedError::conflict("name already taken").into());
    }

    Ok(Json(User {
        id: 1,
        name: new_user.name,
    }))
}

async fn range_failure() -> Result<(), ApiError> {
    Err(NamedError::new("RangeError", "offset out of range").into())
}

async fn io_failure() -> Result<(), ApiError> {
    Err(std::io::Error::other("disk on fire").into())
}

async fn opaque_failure() -> Result<(), ApiError> {
    Err(ApiError::new("boom"))
}

async fn teapot() -> Result<(), ApiError> {
    Err(TypedError::new(418, Some("short and stout".to_owned())).into())
}

/// Router under test
pub fn router() -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/fail/range", get(range_failure))
        .route("/fail/io", get(io_failure))
        .route("/fail/opaque", get(opaque_failure))
        .route("/fail/teapot", get(teapot))
}

/// Status and parsed JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Send a GET request through the router
pub async fn get_json(uri: &str) -> TestResponse {
    let request = Request::get(uri).body(axum::body::Body::empty()).unwrap();
    send(request).await
}

/// Send a POST request with a raw body and optional content type
pub async fn post_raw(uri: &str, content_type: Option<&str>, body: &str) -> TestResponse {
    let mut builder = Request::post(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(http::header::CONTENT_TYPE, content_type);
    }

    let request = builder.body(axum::body::Body::from(body.to_owned())).unwrap();
    send(request).await
}

async fn send(request: Request<axum::body::Body>) -> TestResponse {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}
