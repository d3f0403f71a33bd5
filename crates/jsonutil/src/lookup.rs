//! Keyed lookup that keeps "missing" and "null" apart.
//!
//! The accessors in [`crate::accessors`] collapse both cases into the same
//! lenient result. [`lookup`] is the primitive they share, and callers that
//! need to tell the cases apart can use it directly.

use serde_json::Value;

use crate::types::{JsonArray, JsonObject};

/// Result of looking up a key in an optional object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The object or key was absent, or the object has no such key.
    Missing,
    /// The key is present and holds JSON `null`.
    Null,
    /// The key is present and holds a non-null value.
    Found(&'a Value),
}

impl<'a> Lookup<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Lookup::Null)
    }

    /// The non-null value, if any.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing | Lookup::Null => None,
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    pub fn as_object(self) -> Option<&'a JsonObject> {
        self.value().and_then(Value::as_object)
    }

    pub fn as_array(self) -> Option<&'a JsonArray> {
        self.value().and_then(Value::as_array)
    }

    pub fn as_bool(self) -> Option<bool> {
        self.value().and_then(Value::as_bool)
    }

    pub fn as_f64(self) -> Option<f64> {
        self.value().and_then(Value::as_f64)
    }
}

/// Look up `key` in `obj`.
///
/// # Examples
///
/// ```
/// use jsonutil::{lookup, Lookup};
/// use serde_json::json;
///
/// let doc = json!({"a": null, "b": 1});
/// let obj = doc.as_object();
///
/// assert_eq!(lookup(obj, Some("a")), Lookup::Null);
/// assert_eq!(lookup(obj, Some("b")), Lookup::Found(&json!(1)));
/// assert_eq!(lookup(obj, Some("c")), Lookup::Missing);
/// assert_eq!(lookup(None, Some("b")), Lookup::Missing);
/// assert_eq!(lookup(obj, None), Lookup::Missing);
/// ```
pub fn lookup<'a>(obj: Option<&'a JsonObject>, key: Option<&str>) -> Lookup<'a> {
    let (Some(obj), Some(key)) = (obj, key) else {
        return Lookup::Missing;
    };
    match obj.get(key) {
        None => Lookup::Missing,
        Some(Value::Null) => Lookup::Null,
        Some(value) => Lookup::Found(value),
    }
}
