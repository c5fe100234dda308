//! Field access over untyped JSON request objects.

use serde_json::{Map, Value};

/// A JSON object as received on the wire, before validation.
pub type JsonObject = Map<String, Value>;

/// The value of `key` when it is present, a string, and non-empty.
pub(crate) fn required_text<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a str> {
  match obj.get(key) {
    Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
    _ => None,
  }
}

/// True when every key in `keys` holds non-empty text.
pub(crate) fn all_present(obj: &JsonObject, keys: &[&str]) -> bool {
  keys.iter().all(|k| required_text(obj, k).is_some())
}

/// Read a key already checked by [`all_present`].
pub(crate) fn text(obj: &JsonObject, key: &str) -> String {
  required_text(obj, key).unwrap_or_default().to_owned()
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

  #[test]
  fn empty_and_non_string_values_are_not_present() {
    let o = obj(json!({ "a": "x", "b": "", "c": 3, "d": null }));
    assert_eq!(required_text(&o, "a"), Some("x"));
    assert_eq!(required_text(&o, "b"), None);
    assert_eq!(required_text(&o, "c"), None);
    assert_eq!(required_text(&o, "d"), None);
    assert_eq!(required_text(&o, "missing"), None);
    assert!(all_present(&o, &["a"]));
    assert!(!all_present(&o, &["a", "b"]));
  }
}
