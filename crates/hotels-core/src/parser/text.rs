//! Text fragment normalization
//!
//! Text pulled from the results page arrives as several fragments per field.
//! Lone spaces between inline elements are layout, not content, and the page
//! escapes some characters with a stray backslash.

/// Separator used when none is given
pub const DEFAULT_SEPARATOR: &str = " ";

/// Fragment the page emits between inline elements
const PLACEHOLDER: &str = " ";

/// Join text fragments into one string.
///
/// Fragments equal to a single space are dropped, backslashes are removed
/// from the rest, and the survivors are joined with `separator` in their
/// original order.
///
/// # Examples
/// ```
/// use hotels_core::parser::join_fragments;
///
/// assert_eq!(join_fragments(["Grand", " ", "Hotel"], " "), "Grand Hotel");
/// assert_eq!(join_fragments(["Pool", "Wi\\Fi"], " | "), "Pool | WiFi");
/// ```
pub fn join_fragments<I, S>(fragments: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .filter(|fragment| fragment.as_ref() != PLACEHOLDER)
        .map(|fragment| fragment.as_ref().replace('\\', ""))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `join_fragments` with the default single-space separator.
pub fn normalize<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_fragments(fragments, DEFAULT_SEPARATOR)
}
