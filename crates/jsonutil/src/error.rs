use thiserror::Error;

use crate::types::JsonKind;

/// Failures raised by the strict operations of this crate.
///
/// The lenient accessors never produce these; they degrade to `None`, `""`
/// or a caller supplied default instead.
#[derive(Error, Debug)]
pub enum JsonUtilError {
    #[error("index {index} is out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("expected string at index {index}, found {found}")]
    NotString { index: usize, found: JsonKind },

    #[error("expected array, found {found}")]
    NotArray { found: JsonKind },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("element {index} does not match the target type: {source}")]
    Element {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = JsonUtilError> = std::result::Result<T, E>;
