//! Line-break and URL cleanup for raw document text.
//!
//! Text coming out of PDF-to-text conversion wraps sentences at the page
//! margin. The only reliable paragraph signal left is a period immediately
//! followed by a line break; every other line break is treated as wrap noise.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional scheme, optional `www.`, a domain and an optional path/query
    static ref RE_URL: Regex = Regex::new(
        r"(https?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=()]*)"
    )
    .unwrap();

    /// Runs of whitespace, line breaks included
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Join wrapped lines while keeping paragraph ends.
///
/// A `\n` directly preceded by `.` is a paragraph break and is kept; any other
/// `\n` becomes a single space. The period itself is preserved, so applying the
/// function twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use contract_oxide::text::remove_line_breaks;
///
/// let text = "The contractor shall\nprovide support.\nTask 2 follows";
/// assert_eq!(
///     remove_line_breaks(text),
///     "The contractor shall provide support.\nTask 2 follows"
/// );
/// ```
pub fn remove_line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev = None;

    for ch in text.chars() {
        if ch == '\n' && prev != Some('.') {
            result.push(' ');
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }

    result
}

/// Delete URL-shaped substrings.
///
/// Matches are removed outright, not replaced by a placeholder. The pattern is
/// deliberately loose: anything that looks like `name.tld` (e.g. `report.pdf`)
/// is removed as well.
///
/// # Examples
///
/// ```
/// use contract_oxide::text::remove_url;
///
/// assert_eq!(remove_url("See https://www.sam.gov/opp for details"), "See  for details");
/// ```
pub fn remove_url(text: &str) -> String {
    RE_URL.replace_all(text, "").into_owned()
}

/// Collapse every whitespace run (including line breaks) into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}
