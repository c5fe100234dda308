//! Row mapping between SQLite columns and domain types.
//!
//! Column lists are kept next to the mappers so the `SELECT` order and the
//! `row.get` indices cannot drift apart.

use casebook_core::{
  result::{ExecutionResult, NewExecutionResult, PassFail},
  test_case::{NewTestCase, TestCase},
};

use crate::Result;

// ─── TestCase ─────────────────────────────────────────────────────────────────

pub const TEST_CASE_COLUMNS: &str = "TestCaseID, Name, Description, Preconditions, \
                                     Steps, ExpectedResult, Priority, Status";

pub fn test_case_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TestCase> {
  Ok(TestCase {
    test_case_id: row.get(0)?,
    details:      NewTestCase {
      name:            row.get(1)?,
      description:     row.get(2)?,
      preconditions:   row.get(3)?,
      steps:           row.get(4)?,
      expected_result: row.get(5)?,
      priority:        row.get(6)?,
      status:          row.get(7)?,
    },
  })
}

// ─── ExecutionResult ──────────────────────────────────────────────────────────

pub const RESULT_COLUMNS: &str = "ResultID, TestCaseID, TestAsset, ActualResult, \
                                  DateExecuted, PassFail, Comments";

/// A `Results` row with `PassFail` still in its stored text form.
pub struct RawExecutionResult {
  pub result_id:     i64,
  pub test_case_id:  i64,
  pub test_asset:    String,
  pub actual_result: String,
  pub date_executed: String,
  pub pass_fail:     String,
  pub comments:      String,
}

impl RawExecutionResult {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      result_id:     row.get(0)?,
      test_case_id:  row.get(1)?,
      test_asset:    row.get(2)?,
      actual_result: row.get(3)?,
      date_executed: row.get(4)?,
      pass_fail:     row.get(5)?,
      comments:      row.get(6)?,
    })
  }

  pub fn into_result(self) -> Result<ExecutionResult> {
    Ok(ExecutionResult {
      result_id: self.result_id,
      details:   NewExecutionResult {
        test_case_id:  self.test_case_id,
        test_asset:    self.test_asset,
        actual_result: self.actual_result,
        date_executed: self.date_executed,
        pass_fail:     self.pass_fail.parse::<PassFail>()?,
        comments:      self.comments,
      },
    })
  }
}
