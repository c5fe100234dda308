//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Body message for a test case that does not exist.
pub const TEST_CASE_NOT_FOUND: &str = "Test case not found.";

/// Body message for a path no route matches.
pub const ROUTE_NOT_FOUND: &str = "Not found.";

/// An error returned by an API handler.
///
/// Every variant renders as `{"error": "<message>"}` with the matching status.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Request could not be processed, e.g. the body is not a JSON object.
  #[error("internal error: {0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn test_case_not_found() -> Self { ApiError::NotFound(TEST_CASE_NOT_FOUND.to_owned()) }

  pub fn route_not_found() -> Self { ApiError::NotFound(ROUTE_NOT_FOUND.to_owned()) }
}

impl From<casebook_core::Error> for ApiError {
  fn from(e: casebook_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    if status.is_server_error() {
      tracing::warn!(%status, error = %message, "request failed");
    }
    (status, Json(json!({ "error": message }))).into_response()
  }
}
