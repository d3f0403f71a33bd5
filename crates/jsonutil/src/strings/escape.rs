use std::borrow::Cow;

/// Text written in place of a double quote by [`escape_quotes`].
///
/// [`format_string`] turns every occurrence back into a quote, including
/// occurrences that were in the text to begin with.
pub const QUOTE_PLACEHOLDER: &str = "u0022";

/// Replaces every double quote with [`QUOTE_PLACEHOLDER`].
///
/// `None` and the empty string pass through unchanged.
///
/// # Examples
///
/// ```
/// use jsonutil::escape_quotes;
///
/// assert_eq!(escape_quotes(Some("say \"hi\"")).as_deref(), Some("say u0022hiu0022"));
/// assert_eq!(escape_quotes(None), None);
/// ```
pub fn escape_quotes(value: Option<&str>) -> Option<Cow<'_, str>> {
    let value = value?;
    if !value.contains('"') {
        return Some(Cow::Borrowed(value));
    }
    Some(Cow::Owned(value.replace('"', QUOTE_PLACEHOLDER)))
}

/// Replaces every newline character with the two characters `\n`.
///
/// `None` and the empty string pass through unchanged.
pub fn escape_new_line(value: Option<&str>) -> Option<Cow<'_, str>> {
    let value = value?;
    if !value.contains('\n') {
        return Some(Cow::Borrowed(value));
    }
    Some(Cow::Owned(value.replace('\n', "\\n")))
}

/// Turns escaped whitespace and the quote placeholder back into literal
/// characters.
///
/// Replacements run in this order:
/// - `\t` becomes a tab
/// - `\r\n` becomes a newline
/// - `\r` becomes a newline
/// - `\n` becomes a newline
/// - [`QUOTE_PLACEHOLDER`] becomes `"`
///
/// Carriage returns are folded into newlines. Other backslash sequences are
/// left as they are.
///
/// # Examples
///
/// ```
/// use jsonutil::format_string;
///
/// assert_eq!(
///     format_string(Some("a string with newline\\n")).as_deref(),
///     Some("a string with newline\n")
/// );
/// assert_eq!(format_string(Some("u0022quotedu0022")).as_deref(), Some("\"quoted\""));
/// ```
pub fn format_string(value: Option<&str>) -> Option<Cow<'_, str>> {
    let value = value?;
    if !value.contains('\\') && !value.contains(QUOTE_PLACEHOLDER) {
        return Some(Cow::Borrowed(value));
    }
    let formatted = value
        .replace("\\t", "\t")
        .replace("\\r\\n", "\n")
        .replace("\\r", "\n")
        .replace("\\n", "\n")
        .replace(QUOTE_PLACEHOLDER, "\"");
    Some(Cow::Owned(formatted))
}
