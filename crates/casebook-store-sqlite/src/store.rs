//! [`SqliteStore`]: the SQLite implementation of [`CaseStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use casebook_core::{
  result::{ExecutionResult, NewExecutionResult},
  store::CaseStore,
  test_case::{NewTestCase, TestCase, TestCaseId},
};

use crate::{
  encode::{RESULT_COLUMNS, RawExecutionResult, TEST_CASE_COLUMNS, test_case_from_row},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Casebook store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every
/// operation runs as one closure on the connection's background thread, so
/// the connection is held for exactly that operation and released on every
/// exit path.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for SqliteStore {
  type Error = crate::Error;

  // ── Test cases ────────────────────────────────────────────────────────────

  async fn create_test_case(&self, input: NewTestCase) -> Result<TestCase> {
    let row = input.clone();

    let test_case_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO TestCases (
             Name, Description, Preconditions, Steps,
             ExpectedResult, Priority, Status
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            row.name,
            row.description,
            row.preconditions,
            row.steps,
            row.expected_result,
            row.priority,
            row.status,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(TestCase { test_case_id, details: input })
  }

  async fn list_test_cases(&self) -> Result<Vec<TestCase>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {TEST_CASE_COLUMNS} FROM TestCases ORDER BY TestCaseID"
        ))?;
        let rows = stmt
          .query_map([], test_case_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_test_case(&self, id: TestCaseId) -> Result<Option<TestCase>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {TEST_CASE_COLUMNS} FROM TestCases WHERE TestCaseID = ?1"),
            rusqlite::params![id],
            test_case_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(row)
  }

  async fn update_test_case(
    &self,
    id:    TestCaseId,
    input: NewTestCase,
  ) -> Result<Option<TestCase>> {
    let row = input.clone();

    let changed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE TestCases
           SET Name = ?1, Description = ?2, Preconditions = ?3, Steps = ?4,
               ExpectedResult = ?5, Priority = ?6, Status = ?7
           WHERE TestCaseID = ?8",
          rusqlite::params![
            row.name,
            row.description,
            row.preconditions,
            row.steps,
            row.expected_result,
            row.priority,
            row.status,
            id,
          ],
        )?;
        Ok(changed)
      })
      .await?;

    Ok((changed > 0).then_some(TestCase { test_case_id: id, details: input }))
  }

  async fn delete_test_case(&self, id: TestCaseId) -> Result<Option<usize>> {
    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM TestCases WHERE TestCaseID = ?1",
            rusqlite::params![id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !exists {
          return Ok(None);
        }

        // Explicit so files created without the cascade clause behave the same.
        let results = tx.execute(
          "DELETE FROM Results WHERE TestCaseID = ?1",
          rusqlite::params![id],
        )?;
        tx.execute(
          "DELETE FROM TestCases WHERE TestCaseID = ?1",
          rusqlite::params![id],
        )?;
        tx.commit()?;

        Ok(Some(results))
      })
      .await?;
    Ok(removed)
  }

  // ── Execution results ─────────────────────────────────────────────────────

  async fn record_result(
    &self,
    input: NewExecutionResult,
  ) -> Result<Option<ExecutionResult>> {
    let row = input.clone();

    let result_id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM TestCases WHERE TestCaseID = ?1",
            rusqlite::params![row.test_case_id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !exists {
          return Ok(None);
        }

        tx.execute(
          "INSERT INTO Results (
             TestCaseID, TestAsset, ActualResult, DateExecuted, PassFail, Comments
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.test_case_id,
            row.test_asset,
            row.actual_result,
            row.date_executed,
            row.pass_fail.as_str(),
            row.comments,
          ],
        )?;
        let result_id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Some(result_id))
      })
      .await?;

    Ok(result_id.map(|result_id| ExecutionResult { result_id, details: input }))
  }

  async fn results_for_asset(&self, test_asset: &str) -> Result<Vec<ExecutionResult>> {
    let asset = test_asset.to_owned();

    let raws = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RESULT_COLUMNS} FROM Results WHERE TestAsset = ?1 ORDER BY ResultID"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![asset], RawExecutionResult::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawExecutionResult::into_result).collect()
  }
}
