//! String transforms.
//!
//! These are ad hoc helpers for hand-built JSON text. They are not JSON
//! string escaping: backslashes, unicode escapes and most control
//! characters are left alone. Use `serde_json` for full fidelity.

mod escape;
mod trim;

pub use escape::{escape_new_line, escape_quotes, format_string, QUOTE_PLACEHOLDER};
pub use trim::trim;
