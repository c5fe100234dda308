//! SQL schema for the Casebook SQLite store.
//!
//! Executed once when a store is opened, before it serves any call.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps identities from being reused after the highest row
/// is deleted.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS TestCases (
    TestCaseID     INTEGER PRIMARY KEY AUTOINCREMENT,
    Name           TEXT NOT NULL,
    Description    TEXT NOT NULL,
    Preconditions  TEXT NOT NULL,
    Steps          TEXT NOT NULL,
    ExpectedResult TEXT NOT NULL,
    Priority       TEXT NOT NULL,
    Status         TEXT NOT NULL
);

-- Results are append-only; rows leave only together with their test case.
CREATE TABLE IF NOT EXISTS Results (
    ResultID     INTEGER PRIMARY KEY AUTOINCREMENT,
    TestCaseID   INTEGER NOT NULL
                 REFERENCES TestCases(TestCaseID) ON DELETE CASCADE,
    TestAsset    TEXT NOT NULL,
    ActualResult TEXT NOT NULL,
    DateExecuted TEXT NOT NULL,   -- free-form, not parsed
    PassFail     TEXT NOT NULL CHECK (PassFail IN ('Pass', 'Fail')),
    Comments     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS Results_TestAsset_idx  ON Results(TestAsset);
CREATE INDEX IF NOT EXISTS Results_TestCaseID_idx ON Results(TestCaseID);
";
