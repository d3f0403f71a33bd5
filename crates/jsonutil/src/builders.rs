//! Builders for JSON arrays and hand-assembled JSON text.

use std::fmt::Display;

use serde_json::Value;

use crate::error::{JsonUtilError, Result};
use crate::strings::trim;
use crate::types::{JsonArray, JsonKind};

/// Wraps `value` in double quotes.
///
/// Embedded quotes and control characters are not escaped; the caller must
/// pass text that is already safe to embed.
///
/// # Examples
///
/// ```
/// use jsonutil::quote_string;
///
/// assert_eq!(quote_string(Some("abc")).as_deref(), Some("\"abc\""));
/// assert_eq!(quote_string(None), None);
/// ```
pub fn quote_string(value: Option<&str>) -> Option<String> {
    value.map(|value| format!("\"{value}\""))
}

/// Builds an array of JSON strings from the `Display` form of each item.
///
/// Order is kept and duplicates are not removed.
pub fn build_array_from_strings<T: Display>(items: Option<&[T]>) -> Option<JsonArray> {
    let items = items?;
    Some(
        items
            .iter()
            .map(|item| Value::String(item.to_string()))
            .collect(),
    )
}

/// Text form of [`build_array_from_strings`].
///
/// # Examples
///
/// ```
/// use jsonutil::build_json_array_string;
///
/// assert_eq!(
///     build_json_array_string(Some(["asdf", "2324523", "lkjlkjlkj"].as_slice())).as_deref(),
///     Some(r#"["asdf","2324523","lkjlkjlkj"]"#)
/// );
/// assert_eq!(build_json_array_string::<&str>(None), None);
/// ```
pub fn build_json_array_string<T: Display>(items: Option<&[T]>) -> Option<String> {
    build_array_from_strings(items).map(|array| Value::Array(array).to_string())
}

/// Builds the fragment `"key": [...]` for splicing into a hand-built object.
///
/// An absent or empty item list produces `[]`. The key is not escaped, and
/// joining several fragments with commas is up to the caller.
///
/// # Examples
///
/// ```
/// use jsonutil::build_string_array_fragment;
///
/// assert_eq!(
///     build_string_array_fragment("blah", Some(["asdf", "2324523", "lkjlkjlkj"].as_slice())),
///     r#""blah": ["asdf","2324523","lkjlkjlkj"]"#
/// );
/// assert_eq!(build_string_array_fragment::<&str>("test 123", None), r#""test 123": []"#);
/// ```
pub fn build_string_array_fragment<T: Display>(key: &str, items: Option<&[T]>) -> String {
    let array = build_json_array_string(items).unwrap_or_else(|| "[]".to_owned());
    format!("\"{key}\": {array}")
}

/// Collects already built values into an array. `None` gives an empty array.
pub fn build_array<I>(items: Option<I>) -> JsonArray
where
    I: IntoIterator<Item = Value>,
{
    items
        .map(|items| items.into_iter().collect())
        .unwrap_or_default()
}

/// Returns the contents of an array whose elements are all strings.
///
/// This is the inverse of [`build_array_from_strings`]. `None` gives
/// `Ok(None)`.
///
/// # Errors
///
/// Returns [`JsonUtilError::NotString`] for the first element that is not a
/// string. Nothing is coerced.
pub fn build_string_list(array: Option<&[Value]>) -> Result<Option<Vec<String>>> {
    let Some(array) = array else {
        return Ok(None);
    };
    array
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(JsonUtilError::NotString {
                index,
                found: JsonKind::of(other),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Flattens arbitrary values into display strings.
///
/// Each value is rendered in canonical JSON text and then passed through
/// [`trim`], so strings lose their delimiting quotes. Escapes inside strings
/// are kept, which makes this lossy for text containing quotes or
/// backslashes. `None` gives an empty list.
///
/// # Examples
///
/// ```
/// use jsonutil::flatten_to_strings;
/// use serde_json::json;
///
/// let values = [json!("asdf"), json!(2324523), json!(false)];
/// assert_eq!(flatten_to_strings(Some(values.as_slice())), vec!["asdf", "2324523", "false"]);
/// assert!(flatten_to_strings(None).is_empty());
/// ```
pub fn flatten_to_strings(items: Option<&[Value]>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .map(|item| {
            let text = item.to_string();
            trim(Some(text.as_str())).map(str::to_owned).unwrap_or_default()
        })
        .collect()
}
