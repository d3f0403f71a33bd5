//! Conversions between JSON objects and string maps.

use std::collections::HashMap;

use serde_json::Value;

use crate::accessors::get_string;
use crate::types::JsonObject;

/// Builds an object with one string entry per map entry.
///
/// Keys follow the map's iteration order.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use jsonutil::object_from_map;
///
/// let mut map = HashMap::new();
/// map.insert("foo".to_string(), "bar".to_string());
///
/// let obj = object_from_map(Some(&map)).unwrap();
/// assert_eq!(obj["foo"], "bar");
/// assert!(object_from_map(None).is_none());
/// ```
pub fn object_from_map(map: Option<&HashMap<String, String>>) -> Option<JsonObject> {
    let map = map?;
    Some(
        map.iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

/// Builds a string map with one entry per object key.
///
/// Values go through [`get_string`], so anything that is not a string
/// becomes `""`.
pub fn map_from_object(obj: Option<&JsonObject>) -> Option<HashMap<String, String>> {
    let obj = obj?;
    Some(
        obj.keys()
            .map(|key| (key.clone(), get_string(Some(obj), Some(key.as_str()))))
            .collect(),
    )
}
