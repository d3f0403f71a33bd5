//! jsonutil - Null-safe helpers over `serde_json` values
//!
//! Lenient accessors read optional fields from loosely structured payloads
//! without failing. Builders and string helpers assemble small JSON
//! fragments from native strings, lists and maps.
//!
//! Reads degrade to `None`, `""` or a caller supplied default. Operations
//! that assume a specific element type return a [`JsonUtilError`] instead of
//! coercing.
//!
//! # Example
//!
//! ```
//! use jsonutil::{get_number, get_object, get_string, parse_object};
//!
//! let obj = parse_object(r#"{"user": {"name": "ada", "age": 36}}"#);
//!
//! let user = get_object(obj.as_ref(), Some("user"));
//! assert_eq!(get_string(user, Some("name")), "ada");
//! assert_eq!(get_number(user, Some("age")), Some(36.0));
//! assert_eq!(get_string(user, Some("email")), "");
//! ```

pub mod accessors;
pub mod builders;
pub mod error;
pub mod lookup;
pub mod map_bridge;
pub mod strings;
pub mod typed;
pub mod types;

// Re-exports for convenience
pub use accessors::{
    get_array, get_boolean, get_number, get_object, get_object_at, get_raw_value_as_string,
    get_string, is_empty, is_valid_json, parse_object, parse_string_value,
};
pub use builders::{
    build_array, build_array_from_strings, build_json_array_string, build_string_array_fragment,
    build_string_list, flatten_to_strings, quote_string,
};
pub use error::{JsonUtilError, Result};
pub use lookup::{lookup, Lookup};
pub use map_bridge::{map_from_object, object_from_map};
pub use strings::{escape_new_line, escape_quotes, format_string, trim, QUOTE_PLACEHOLDER};
pub use typed::parse_array_of;
pub use types::{JsonArray, JsonKind, JsonObject};
