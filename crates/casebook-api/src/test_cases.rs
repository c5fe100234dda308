//! Handlers for the test-case endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/createTestCase` | Body: all seven fields; 201 + new id |
//! | `GET`    | `/getAllTestCases` | Array, possibly empty |
//! | `GET`    | `/getTestCase/:id` | 404 if not found |
//! | `PUT`    | `/updateTestCase/:id` | Full replace; 404 if not found |
//! | `DELETE` | `/deleteTestCase/:id` | Also removes the case's results |

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use casebook_core::{
  store::CaseStore,
  test_case::{NewTestCase, TestCase},
};
use serde_json::json;

use crate::{
  error::ApiError,
  extract::{CaseId, json_object},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /createTestCase`: returns 201 + `{"message", "TestCaseID"}`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewTestCase::from_json(&json_object(&body)?)?;

  let test_case = store
    .create_test_case(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(test_case_id = test_case.test_case_id, "test case created");
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "message": "Test case created successfully.",
      "TestCaseID": test_case.test_case_id,
    })),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /getAllTestCases`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TestCase>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let test_cases = store
    .list_test_cases()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(test_cases))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /getTestCase/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  CaseId(id): CaseId,
) -> Result<Json<TestCase>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let test_case = store
    .get_test_case(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::test_case_not_found)?;
  Ok(Json(test_case))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /updateTestCase/:id`
///
/// The existence check comes first, so an unknown id is a 404 whatever the
/// body holds.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  CaseId(id): CaseId,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .get_test_case(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::test_case_not_found)?;

  let input = NewTestCase::from_json(&json_object(&body)?)?;

  store
    .update_test_case(id, input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::test_case_not_found)?;

  tracing::info!(test_case_id = id, "test case updated");
  Ok(Json(json!({ "message": "Test case updated successfully." })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /deleteTestCase/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  CaseId(id): CaseId,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let results_removed = store
    .delete_test_case(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::test_case_not_found)?;

  tracing::info!(test_case_id = id, results_removed, "test case deleted");
  Ok(Json(json!({ "message": "Test case deleted successfully." })))
}
