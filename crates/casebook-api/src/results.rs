//! Handlers for execution results.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/testCases/:id/executionResult` | Append a result; 201 + new id |
//! | `GET`  | `/testCases/executionResult/:testAsset` | Exact asset match; array, possibly empty |

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use casebook_core::{
  result::{ExecutionResult, NewExecutionResult},
  store::CaseStore,
};
use serde_json::json;

use crate::{
  error::ApiError,
  extract::{CaseId, json_object},
};

// ─── Record ───────────────────────────────────────────────────────────────────

/// `POST /testCases/:id/executionResult`
///
/// The path id is the stored reference; a `TestCaseID` in the body must agree
/// with it.
pub async fn record<S>(
  State(store): State<Arc<S>>,
  CaseId(id): CaseId,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewExecutionResult::from_json(id, &json_object(&body)?)?;

  let result = store
    .record_result(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::test_case_not_found)?;

  tracing::info!(
    test_case_id = id,
    result_id = result.result_id,
    pass_fail = %result.details.pass_fail,
    "execution result recorded"
  );
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "message": "Execution Result recorded successfully.",
      "ResultID": result.result_id,
    })),
  ))
}

// ─── By asset ─────────────────────────────────────────────────────────────────

/// `GET /testCases/executionResult/:testAsset`
pub async fn by_asset<S>(
  State(store): State<Arc<S>>,
  Path(test_asset): Path<String>,
) -> Result<Json<Vec<ExecutionResult>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let results = store
    .results_for_asset(&test_asset)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::debug!(test_asset = %test_asset, count = results.len(), "execution results listed");
  Ok(Json(results))
}
