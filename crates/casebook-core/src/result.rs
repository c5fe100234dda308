//! Execution results: append-only records of one test run against one asset.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  Error, Result,
  payload::{JsonObject, all_present, required_text, text},
  test_case::TestCaseId,
};

/// Store-assigned identity of an execution result.
pub type ResultId = i64;

/// Outcome of a test run. Exactly `"Pass"` or `"Fail"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassFail {
  Pass,
  Fail,
}

impl PassFail {
  pub fn as_str(self) -> &'static str {
    match self {
      PassFail::Pass => "Pass",
      PassFail::Fail => "Fail",
    }
  }
}

impl fmt::Display for PassFail {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Case-sensitive: `"pass"` is rejected.
impl FromStr for PassFail {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Pass" => Ok(PassFail::Pass),
      "Fail" => Ok(PassFail::Fail),
      other => Err(Error::UnknownPassFail(other.to_owned())),
    }
  }
}

/// A result as submitted for recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExecutionResult {
  #[serde(rename = "TestCaseID")]
  pub test_case_id:  TestCaseId,
  #[serde(rename = "TestAsset")]
  pub test_asset:    String,
  #[serde(rename = "ActualResult")]
  pub actual_result: String,
  #[serde(rename = "DateExecuted")]
  pub date_executed: String,
  #[serde(rename = "PassFail")]
  pub pass_fail:     PassFail,
  #[serde(rename = "Comments")]
  pub comments:      String,
}

impl NewExecutionResult {
  /// Text fields that must be present and non-empty.
  pub const TEXT_FIELDS: [&'static str; 4] =
    ["TestAsset", "ActualResult", "DateExecuted", "Comments"];

  /// Validate an untyped request object for the test case addressed by
  /// `test_case_id`.
  ///
  /// `TestCaseID` in the body is optional; when given it must name the same
  /// test case as `test_case_id`. The stored reference is always
  /// `test_case_id`.
  pub fn from_json(test_case_id: TestCaseId, obj: &JsonObject) -> Result<Self> {
    if !all_present(obj, &Self::TEXT_FIELDS) {
      return Err(Error::InvalidExecutionResult);
    }
    if let Some(body_id) = obj.get("TestCaseID")
      && !refers_to(body_id, test_case_id)
    {
      return Err(Error::InvalidExecutionResult);
    }
    let pass_fail = required_text(obj, "PassFail")
      .and_then(|s| s.parse::<PassFail>().ok())
      .ok_or(Error::InvalidExecutionResult)?;

    Ok(Self {
      test_case_id,
      test_asset: text(obj, "TestAsset"),
      actual_result: text(obj, "ActualResult"),
      date_executed: text(obj, "DateExecuted"),
      pass_fail,
      comments: text(obj, "Comments"),
    })
  }
}

/// Accepts the id as a JSON integer or as decimal text.
fn refers_to(value: &Value, id: TestCaseId) -> bool {
  match value {
    Value::Number(n) => n.as_i64() == Some(id),
    Value::String(s) => s.parse::<TestCaseId>().ok() == Some(id),
    _ => false,
  }
}

/// A persisted execution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
  #[serde(rename = "ResultID")]
  pub result_id: ResultId,
  #[serde(flatten)]
  pub details:   NewExecutionResult,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn obj(v: Value) -> JsonObject {
    match v {
      Value::Object(m) => m,
      _ => panic!("not an object"),
    }
  }

  fn body() -> JsonObject {
    obj(json!({
      "TestCaseID": 1,
      "TestAsset": "Asset1",
      "ActualResult": "ok",
      "DateExecuted": "2024-01-01",
      "PassFail": "Pass",
      "Comments": "fine",
    }))
  }

  #[test]
  fn accepts_complete_payload() {
    let r = NewExecutionResult::from_json(1, &body()).unwrap();
    assert_eq!(r.test_case_id, 1);
    assert_eq!(r.test_asset, "Asset1");
    assert_eq!(r.pass_fail, PassFail::Pass);
  }

  #[test]
  fn body_test_case_id_is_optional() {
    let mut o = body();
    o.remove("TestCaseID");
    let r = NewExecutionResult::from_json(7, &o).unwrap();
    assert_eq!(r.test_case_id, 7);
  }

  #[test]
  fn body_test_case_id_must_match_path() {
    assert_eq!(
      NewExecutionResult::from_json(2, &body()),
      Err(Error::InvalidExecutionResult)
    );

    let mut o = body();
    o.insert("TestCaseID".into(), json!("2"));
    assert!(NewExecutionResult::from_json(2, &o).is_ok());

    o.insert("TestCaseID".into(), json!(null));
    assert!(NewExecutionResult::from_json(2, &o).is_err());
  }

  #[test]
  fn pass_fail_is_exactly_pass_or_fail() {
    for ok in ["Pass", "Fail"] {
      let mut o = body();
      o.insert("PassFail".into(), json!(ok));
      assert!(NewExecutionResult::from_json(1, &o).is_ok(), "{ok}");
    }
    for bad in ["pass", "FAIL", "Skipped", ""] {
      let mut o = body();
      o.insert("PassFail".into(), json!(bad));
      assert_eq!(
        NewExecutionResult::from_json(1, &o),
        Err(Error::InvalidExecutionResult),
        "{bad}"
      );
    }
  }

  #[test]
  fn missing_comments_is_a_validation_error() {
    let mut o = body();
    o.remove("Comments");
    assert_eq!(
      NewExecutionResult::from_json(1, &o),
      Err(Error::InvalidExecutionResult)
    );
  }

  #[test]
  fn pass_fail_round_trips_through_text() {
    assert_eq!("Fail".parse::<PassFail>().unwrap().to_string(), "Fail");
    assert!(matches!("pass".parse::<PassFail>(), Err(Error::UnknownPassFail(_))));
  }
}
