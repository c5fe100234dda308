//! Test cases, the stored test specifications.
//!
//! A test case is an integer identity plus seven free-form text fields. All
//! seven are replaced together on update; there is no partial patch.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  payload::{JsonObject, all_present, text},
};

/// Store-assigned identity of a test case. Never reused after deletion.
pub type TestCaseId = i64;

/// The seven descriptive fields of a test case, as accepted on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewTestCase {
  pub name:            String,
  pub description:     String,
  pub preconditions:   String,
  pub steps:           String,
  pub expected_result: String,
  pub priority:        String,
  pub status:          String,
}

impl NewTestCase {
  /// Wire names of the required fields, in column order.
  pub const FIELDS: [&'static str; 7] = [
    "Name",
    "Description",
    "Preconditions",
    "Steps",
    "ExpectedResult",
    "Priority",
    "Status",
  ];

  /// Validate an untyped request object and build a [`NewTestCase`] from it.
  ///
  /// Every field must be present and hold non-empty text. The whole object is
  /// checked before any value is read, so a missing key is reported the same
  /// way as an empty one.
  pub fn from_json(obj: &JsonObject) -> Result<Self> {
    if !all_present(obj, &Self::FIELDS) {
      return Err(Error::InvalidTestCase);
    }

    Ok(Self {
      name:            text(obj, "Name"),
      description:     text(obj, "Description"),
      preconditions:   text(obj, "Preconditions"),
      steps:           text(obj, "Steps"),
      expected_result: text(obj, "ExpectedResult"),
      priority:        text(obj, "Priority"),
      status:          text(obj, "Status"),
    })
  }
}

/// A persisted test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
  #[serde(rename = "TestCaseID")]
  pub test_case_id: TestCaseId,
  #[serde(flatten)]
  pub details:      NewTestCase,
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};

  use super::*;

  fn obj(v: Value) -> JsonObject {
    match v {
      Value::Object(m) => m,
      _ => panic!("not an object"),
    }
  }

  fn login() -> Value {
    json!({
      "Name": "Login",
      "Description": "d",
      "Preconditions": "p",
      "Steps": "s",
      "ExpectedResult": "e",
      "Priority": "High",
      "Status": "Pending",
    })
  }

  #[test]
  fn accepts_complete_payload() {
    let tc = NewTestCase::from_json(&obj(login())).unwrap();
    assert_eq!(tc.name, "Login");
    assert_eq!(tc.expected_result, "e");
    assert_eq!(tc.status, "Pending");
  }

  #[test]
  fn missing_key_is_a_validation_error() {
    let mut o = obj(login());
    o.remove("Steps");
    assert_eq!(NewTestCase::from_json(&o), Err(Error::InvalidTestCase));
  }

  #[test]
  fn empty_value_is_a_validation_error() {
    let mut o = obj(login());
    o.insert("Priority".into(), json!(""));
    assert_eq!(NewTestCase::from_json(&o), Err(Error::InvalidTestCase));
  }

  #[test]
  fn serialises_with_column_names() {
    let tc = TestCase {
      test_case_id: 1,
      details:      NewTestCase::from_json(&obj(login())).unwrap(),
    };
    let v = serde_json::to_value(&tc).unwrap();
    assert_eq!(v["TestCaseID"], 1);
    assert_eq!(v["ExpectedResult"], "e");
    assert_eq!(v["Name"], "Login");
  }
}
