const QUOTE: char = '"';

/// Removes one leading and one trailing double quote, when present.
///
/// Each side is handled on its own, so unbalanced quotes are stripped too.
/// Quotes inside the text are untouched, and nothing is unescaped.
///
/// # Examples
///
/// ```
/// use jsonutil::trim;
///
/// assert_eq!(trim(Some("\"test\"")), Some("test"));
/// assert_eq!(trim(Some("\"test")), Some("test"));
/// assert_eq!(trim(Some("\"te\"st\"")), Some("te\"st"));
/// assert_eq!(trim(None), None);
/// ```
pub fn trim(value: Option<&str>) -> Option<&str> {
    let value = value?;
    let value = value.strip_prefix(QUOTE).unwrap_or(value);
    Some(value.strip_suffix(QUOTE).unwrap_or(value))
}
