//! Request pieces shared by the handlers: the numeric id path segment and the
//! untyped JSON object body.

use axum::{
  body::Bytes,
  extract::{FromRequestParts, Path},
  http::request::Parts,
};
use casebook_core::{JsonObject, test_case::TestCaseId};
use serde_json::Value;

use crate::error::ApiError;

/// A test-case identity taken from the URL.
///
/// Only plain decimal digits match. Anything else (a sign, a letter, an
/// overflow) is answered as if no route existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseId(pub TestCaseId);

impl<S> FromRequestParts<S> for CaseId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
      .await
      .map_err(|_| ApiError::route_not_found())?;
    parse_case_id(&raw).map(CaseId).ok_or_else(ApiError::route_not_found)
  }
}

pub fn parse_case_id(raw: &str) -> Option<TestCaseId> {
  if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  raw.parse().ok()
}

/// Parse a request body into a JSON object.
///
/// Malformed JSON and non-object documents are request-processing failures
/// (500 with the parser's message), not validation failures.
pub fn json_object(body: &Bytes) -> Result<JsonObject, ApiError> {
  match serde_json::from_slice::<Value>(body) {
    Ok(Value::Object(obj)) => Ok(obj),
    Ok(other) => Err(ApiError::Internal(format!(
      "expected a JSON object, got {}",
      json_kind(&other)
    ))),
    Err(e) => Err(ApiError::Internal(e.to_string())),
  }
}

fn json_kind(v: &Value) -> &'static str {
  match v {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn case_id_accepts_only_digits() {
    assert_eq!(parse_case_id("0"), Some(0));
    assert_eq!(parse_case_id("42"), Some(42));
    assert_eq!(parse_case_id("-1"), None);
    assert_eq!(parse_case_id("+1"), None);
    assert_eq!(parse_case_id("1a"), None);
    assert_eq!(parse_case_id(""), None);
    assert_eq!(parse_case_id("99999999999999999999"), None);
  }

  #[test]
  fn body_must_be_an_object() {
    assert!(json_object(&Bytes::from_static(b"{\"a\":1}")).is_ok());
    assert!(matches!(
      json_object(&Bytes::from_static(b"[1,2]")),
      Err(ApiError::Internal(m)) if m.contains("array")
    ));
    assert!(matches!(
      json_object(&Bytes::from_static(b"{not json")),
      Err(ApiError::Internal(_))
    ));
    assert!(matches!(json_object(&Bytes::new()), Err(ApiError::Internal(_))));
  }
}
