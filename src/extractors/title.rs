//! Title extraction.
//!
//! Procurement documents rarely mark their title explicitly. The title is
//! taken to be everything before the first structural anchor line
//! ("Executive Summary", "Background", "Introduction", "This is ...") or the
//! first date, whichever comes first.

use super::dates::MONTH_NAME_DATE;
use crate::text::collapse_whitespace;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches from the start of the first line that contains an anchor phrase
    static ref RE_ANCHOR_LINE: Regex =
        Regex::new(r"(?im)^.*?(executive\ssummary|background|introduction|this\sis)").unwrap();

    /// Numeric (2-4 digit year) or month-name date
    static ref RE_ANY_DATE: Regex = Regex::new(&format!(
        r"[0-9]{{1,2}}[-/][0-9]{{1,2}}[-/][0-9]{{2,4}}|{}",
        MONTH_NAME_DATE
    ))
    .unwrap();
}

/// Extract the title span of a document.
///
/// The anchor position is the start of the line holding the first anchor
/// phrase. Without an anchor there is no title, even if a date is present.
/// The returned text has whitespace runs collapsed to single spaces.
///
/// # Examples
///
/// ```
/// use contract_oxide::extractors::extract_title;
///
/// let text = "Help Desk Support Services\nStatement of Work\nBackground\nThe IRS ...";
/// assert_eq!(
///     extract_title(text).as_deref(),
///     Some("Help Desk Support Services Statement of Work ")
/// );
/// assert_eq!(extract_title("Untitled 01/02/2022"), None);
/// ```
pub fn extract_title(text: &str) -> Option<String> {
    let anchor = RE_ANCHOR_LINE.find(text)?;

    let end = match RE_ANY_DATE.find(text) {
        Some(date) => anchor.start().min(date.start()),
        None => anchor.start(),
    };

    Some(collapse_whitespace(&text[..end]))
}
