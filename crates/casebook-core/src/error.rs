//! Error types for `casebook-core`.

use thiserror::Error;

/// Field list reported when a test-case payload is rejected.
pub const TEST_CASE_FIELDS_REQUIRED: &str =
  "Name, Description, Preconditions, Steps, ExpectedResult, Priority, Status are required.";

/// Field list reported when an execution-result payload is rejected.
pub const RESULT_FIELDS_REQUIRED: &str =
  "TestCaseID, TestAsset, ActualResult, DateExecuted, Comments, PassFail are required.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// The payload does not carry all seven test-case fields as non-empty text.
  #[error("{}", TEST_CASE_FIELDS_REQUIRED)]
  InvalidTestCase,

  /// The payload is not a valid execution result for the addressed test case.
  #[error("{}", RESULT_FIELDS_REQUIRED)]
  InvalidExecutionResult,

  #[error("unknown pass/fail value: {0:?}")]
  UnknownPassFail(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
