//! The `CaseStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `casebook-store-sqlite`).
//! The HTTP layer (`casebook-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  result::{ExecutionResult, NewExecutionResult},
  test_case::{NewTestCase, TestCase, TestCaseId},
};

/// Abstraction over a Casebook store backend.
///
/// Every method is one self-contained unit of work against the backing store.
/// Check-then-act operations must be atomic with respect to other calls.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CaseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Test cases ────────────────────────────────────────────────────────

  /// Persist a new test case and return it with its assigned identity.
  fn create_test_case(
    &self,
    input: NewTestCase,
  ) -> impl Future<Output = Result<TestCase, Self::Error>> + Send + '_;

  /// All test cases, ordered by identity.
  fn list_test_cases(
    &self,
  ) -> impl Future<Output = Result<Vec<TestCase>, Self::Error>> + Send + '_;

  /// Retrieve a test case by identity. Returns `None` if not found.
  fn get_test_case(
    &self,
    id: TestCaseId,
  ) -> impl Future<Output = Result<Option<TestCase>, Self::Error>> + Send + '_;

  /// Replace all seven fields of an existing test case.
  ///
  /// Returns `None` (and writes nothing) if `id` does not exist.
  fn update_test_case(
    &self,
    id: TestCaseId,
    input: NewTestCase,
  ) -> impl Future<Output = Result<Option<TestCase>, Self::Error>> + Send + '_;

  /// Delete a test case together with its execution results.
  ///
  /// Returns the number of results removed alongside it, or `None` if `id`
  /// does not exist.
  fn delete_test_case(
    &self,
    id: TestCaseId,
  ) -> impl Future<Output = Result<Option<usize>, Self::Error>> + Send + '_;

  // ── Execution results (append-only) ───────────────────────────────────

  /// Record a result against `input.test_case_id`.
  ///
  /// Returns `None` (and writes nothing) if that test case does not exist.
  fn record_result(
    &self,
    input: NewExecutionResult,
  ) -> impl Future<Output = Result<Option<ExecutionResult>, Self::Error>> + Send + '_;

  /// All results whose `TestAsset` equals `test_asset` exactly, ordered by
  /// identity.
  fn results_for_asset<'a>(
    &'a self,
    test_asset: &'a str,
  ) -> impl Future<Output = Result<Vec<ExecutionResult>, Self::Error>> + Send + 'a;
}
