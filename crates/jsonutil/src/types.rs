//! Shared type aliases and the JSON kind tag.

use serde_json::{Map, Value};
use std::fmt;

/// A JSON object: string keys mapped to values.
pub type JsonObject = Map<String, Value>;

/// A JSON array.
pub type JsonArray = Vec<Value>;

/// The kind of a JSON value, used when reporting type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonutil::JsonKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(JsonKind::of(&json!(12)), JsonKind::Number);
    /// assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
