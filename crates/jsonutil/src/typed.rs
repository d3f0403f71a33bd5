//! Typed parsing of JSON arrays.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{JsonUtilError, Result};
use crate::types::JsonKind;

/// Parses `json` as an array and deserializes every element into `T`.
///
/// The text is parsed strictly into a value tree first. Each element is
/// then converted on its own, so a failure names the offending index.
///
/// # Errors
///
/// - [`JsonUtilError::Parse`] when the text is not valid JSON.
/// - [`JsonUtilError::NotArray`] when the root is not an array.
/// - [`JsonUtilError::Element`] when an element does not fit `T`.
///
/// # Examples
///
/// ```
/// use jsonutil::parse_array_of;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Item {
///     id: String,
/// }
///
/// let items: Vec<Item> = parse_array_of(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
/// assert_eq!(items[1], Item { id: "b".to_string() });
/// ```
pub fn parse_array_of<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        other => {
            return Err(JsonUtilError::NotArray {
                found: JsonKind::of(&other),
            })
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| JsonUtilError::Element { index, source })
        })
        .collect()
}
