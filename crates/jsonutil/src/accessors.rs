//! Lenient read accessors.
//!
//! None of these functions fail. Absent containers, absent keys, JSON `null`
//! and values of the wrong type all degrade to `None`, `""` or the supplied
//! default. The only exception is [`get_object_at`], which reports an out of
//! bounds index instead of hiding it.

use serde::de::IgnoredAny;
use serde_json::Value;
use tracing::debug;

use crate::error::{JsonUtilError, Result};
use crate::lookup::lookup;
use crate::types::{JsonArray, JsonKind, JsonObject};

/// Returns the string stored under `key`, or `""`.
///
/// The empty string is returned when `obj` or `key` is `None`, the key is
/// not present, or the value is `null` or not a string.
///
/// # Examples
///
/// ```
/// use jsonutil::get_string;
/// use serde_json::json;
///
/// let doc = json!({"name": "alice", "age": 31, "nick": null});
/// let obj = doc.as_object();
///
/// assert_eq!(get_string(obj, Some("name")), "alice");
/// assert_eq!(get_string(obj, Some("age")), "");
/// assert_eq!(get_string(obj, Some("nick")), "");
/// assert_eq!(get_string(None, Some("name")), "");
/// ```
pub fn get_string(obj: Option<&JsonObject>, key: Option<&str>) -> String {
    lookup(obj, key).as_str().unwrap_or_default().to_owned()
}

/// Returns the nested object stored under `key`.
pub fn get_object<'a>(obj: Option<&'a JsonObject>, key: Option<&str>) -> Option<&'a JsonObject> {
    lookup(obj, key).as_object()
}

/// Strictly parses `json` and returns its root object.
///
/// Any parse failure, trailing content included, yields `None`, as does a
/// root that is an array or a scalar. Parser errors are not surfaced; they
/// are only emitted as `debug` events.
///
/// # Examples
///
/// ```
/// use jsonutil::parse_object;
///
/// let obj = parse_object(r#"{"testkey": "testvalue"}"#).unwrap();
/// assert_eq!(obj["testkey"], "testvalue");
///
/// assert!(parse_object("[1, 2]").is_none());
/// assert!(parse_object("{} trailing").is_none());
/// ```
pub fn parse_object(json: &str) -> Option<JsonObject> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(other) => {
            debug!(target: "jsonutil", found = %JsonKind::of(&other), "JSON root is not an object");
            None
        }
        Err(err) => {
            debug!(target: "jsonutil", error = %err, "failed to parse JSON object");
            None
        }
    }
}

/// Parses `json` and returns the string stored under `key`, or `""`.
pub fn parse_string_value(json: &str, key: &str) -> String {
    get_string(parse_object(json).as_ref(), Some(key))
}

/// Returns true when `json` is non-blank text that parses strictly as JSON.
///
/// Any root type is accepted.
pub fn is_valid_json(json: Option<&str>) -> bool {
    let Some(json) = json else {
        return false;
    };
    if json.trim().is_empty() {
        return false;
    }
    match serde_json::from_str::<IgnoredAny>(json) {
        Ok(_) => true,
        Err(err) => {
            debug!(target: "jsonutil", error = %err, "text is not valid JSON");
            false
        }
    }
}

/// Returns the array stored under `key`.
pub fn get_array<'a>(obj: Option<&'a JsonObject>, key: Option<&str>) -> Option<&'a JsonArray> {
    lookup(obj, key).as_array()
}

/// Returns the element at `index` if it is an object.
///
/// `Ok(None)` covers a `null` element and an element of another type. An
/// index past the end is an error, not an absent result.
///
/// # Errors
///
/// Returns [`JsonUtilError::IndexOutOfBounds`] when `index >= array.len()`.
///
/// # Examples
///
/// ```
/// use jsonutil::get_object_at;
/// use serde_json::json;
///
/// let doc = json!([{"a": 1}, null, 5]);
/// let array = doc.as_array().unwrap();
///
/// assert!(get_object_at(array, 0).unwrap().is_some());
/// assert!(get_object_at(array, 1).unwrap().is_none());
/// assert!(get_object_at(array, 2).unwrap().is_none());
/// assert!(get_object_at(array, 3).is_err());
/// ```
pub fn get_object_at(array: &[Value], index: usize) -> Result<Option<&JsonObject>> {
    let element = array.get(index).ok_or(JsonUtilError::IndexOutOfBounds {
        index,
        len: array.len(),
    })?;
    Ok(element.as_object())
}

/// Returns the boolean stored under `key`, or `default`.
pub fn get_boolean(obj: Option<&JsonObject>, key: Option<&str>, default: bool) -> bool {
    lookup(obj, key).as_bool().unwrap_or(default)
}

/// Returns the number stored under `key` as an `f64`.
pub fn get_number(obj: Option<&JsonObject>, key: Option<&str>) -> Option<f64> {
    lookup(obj, key).as_f64()
}

/// Returns a string without the surrounding quotes, or any other value in
/// its canonical JSON text form.
///
/// Meant for scalars. Arrays and objects come back as compact JSON.
///
/// # Examples
///
/// ```
/// use jsonutil::get_raw_value_as_string;
/// use serde_json::json;
///
/// assert_eq!(get_raw_value_as_string(Some(&json!(12345))).as_deref(), Some("12345"));
/// assert_eq!(get_raw_value_as_string(Some(&json!("test 123 test"))).as_deref(), Some("test 123 test"));
/// assert_eq!(get_raw_value_as_string(Some(&json!(true))).as_deref(), Some("true"));
/// assert_eq!(get_raw_value_as_string(None), None);
/// ```
pub fn get_raw_value_as_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Returns true for an absent value, an empty array or an empty object.
///
/// Any scalar is non-empty, including `false`, `0`, `""` and `null`: their
/// canonical text forms are neither `[]` nor `{}`.
///
/// # Examples
///
/// ```
/// use jsonutil::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some(&json!({}))));
/// assert!(is_empty(Some(&json!([]))));
/// assert!(!is_empty(Some(&json!(false))));
/// assert!(!is_empty(Some(&json!(0))));
/// ```
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(obj)) => obj.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "value",
            "nested": {"inner": "x"},
            "list": [1, 2, 3],
            "flag": true,
            "count": 12345,
            "ratio": 0.25,
            "nothing": null
        })
    }

    #[test]
    fn test_get_string_degrades_to_empty() {
        let doc = sample();
        let obj = doc.as_object();

        assert_eq!(get_string(obj, Some("name")), "value");
        assert_eq!(get_string(obj, Some("missing")), "");
        assert_eq!(get_string(obj, Some("nothing")), "");
        assert_eq!(get_string(obj, Some("nested")), "");
        assert_eq!(get_string(obj, Some("list")), "");
        assert_eq!(get_string(obj, Some("count")), "");
        assert_eq!(get_string(obj, Some("flag")), "");
        assert_eq!(get_string(obj, None), "");
        assert_eq!(get_string(None, None), "");
    }

    #[test]
    fn test_get_object() {
        let doc = sample();
        let obj = doc.as_object();

        let nested = get_object(obj, Some("nested")).unwrap();
        assert_eq!(get_string(Some(nested), Some("inner")), "x");
        assert!(get_object(obj, Some("name")).is_none());
        assert!(get_object(obj, Some("nothing")).is_none());
        assert!(get_object(obj, Some("missing")).is_none());
        assert!(get_object(None, Some("nested")).is_none());
        assert!(get_object(obj, None).is_none());
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert!(parse_object("{}").is_some());
        assert!(parse_object("[]").is_none());
        assert!(parse_object("\"text\"").is_none());
        assert!(parse_object("42").is_none());
        assert!(parse_object("null").is_none());
        assert!(parse_object("").is_none());
        assert!(parse_object("{\"a\": }").is_none());
        assert!(parse_object("{\"a\": 1} // comment").is_none());
    }

    #[test]
    fn test_parse_object_keeps_insertion_order() {
        let obj = parse_object(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_string_value() {
        assert_eq!(parse_string_value(r#"{"id": "abc"}"#, "id"), "abc");
        assert_eq!(parse_string_value(r#"{"id": 7}"#, "id"), "");
        assert_eq!(parse_string_value("not json", "id"), "");
    }

    #[test]
    fn test_is_valid_json() {
        assert!(is_valid_json(Some("{}")));
        assert!(is_valid_json(Some("[1, 2]")));
        assert!(is_valid_json(Some("  \"text\" ")));
        assert!(!is_valid_json(Some("")));
        assert!(!is_valid_json(Some("   ")));
        assert!(!is_valid_json(Some("{")));
        assert!(!is_valid_json(None));
    }

    #[test]
    fn test_get_array() {
        let doc = sample();
        let obj = doc.as_object();

        assert_eq!(get_array(obj, Some("list")), Some(&vec![json!(1), json!(2), json!(3)]));
        assert!(get_array(obj, Some("nested")).is_none());
        assert!(get_array(obj, Some("nothing")).is_none());
        assert!(get_array(None, Some("list")).is_none());
    }

    #[test]
    fn test_get_object_at_out_of_bounds() {
        let items = vec![json!({"a": 1})];
        let err = get_object_at(&items, 5).unwrap_err();
        assert!(matches!(err, JsonUtilError::IndexOutOfBounds { index: 5, len: 1 }));
        assert!(get_object_at(&[], 0).is_err());
    }

    #[test]
    fn test_get_boolean() {
        let doc = sample();
        let obj = doc.as_object();

        assert!(get_boolean(obj, Some("flag"), false));
        assert!(get_boolean(obj, Some("missing"), true));
        assert!(!get_boolean(obj, Some("missing"), false));
        assert!(get_boolean(obj, Some("name"), true));
        assert!(get_boolean(obj, Some("nothing"), true));
        assert!(get_boolean(None, Some("flag"), true));
    }

    #[test]
    fn test_get_number() {
        let doc = sample();
        let obj = doc.as_object();

        assert_eq!(get_number(obj, Some("count")), Some(12345.0));
        assert_eq!(get_number(obj, Some("ratio")), Some(0.25));
        assert_eq!(get_number(obj, Some("missing")), None);
        assert_eq!(get_number(obj, Some("nothing")), None);
        assert_eq!(get_number(obj, Some("name")), None);
    }

    #[test]
    fn test_get_raw_value_as_string_compound() {
        assert_eq!(get_raw_value_as_string(Some(&json!([1, 2]))).as_deref(), Some("[1,2]"));
        assert_eq!(get_raw_value_as_string(Some(&json!(null))).as_deref(), Some("null"));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&json!({}))));
        assert!(is_empty(Some(&json!([]))));
        assert!(!is_empty(Some(&json!({"testkey": "testvalue"}))));
        assert!(!is_empty(Some(&json!([null]))));
        assert!(!is_empty(Some(&json!(""))));
        assert!(!is_empty(Some(&json!(null))));
        assert!(!is_empty(Some(&json!(false))));
        assert!(!is_empty(Some(&json!(0))));
    }
}
