//! Date mention extraction.
//!
//! Two surface forms are recognised: numeric (`3/15/2022`, `03-15-2022`) and
//! month-name (`March 15, 2022`, `Sept. 1 2021`). Numeric dates win outright:
//! when the text contains any numeric date, month-name dates are not searched.

use lazy_static::lazy_static;
use regex::Regex;

/// Month names with their standard abbreviations.
pub(crate) const MONTH_NAME_DATE: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d{1,2},?\s+\d{4}";

lazy_static! {
    /// Day/month of 1-2 digits, 4-digit year
    static ref RE_NUMERIC_DATE: Regex = Regex::new(r"[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{4}").unwrap();

    static ref RE_MONTH_DATE: Regex = Regex::new(MONTH_NAME_DATE).unwrap();
}

/// Extract date mentions in order of appearance.
///
/// Returns the numeric-form matches if there is at least one, otherwise the
/// month-name matches, otherwise `None`. The two forms are never mixed.
///
/// # Examples
///
/// ```
/// use contract_oxide::extractors::extract_dates;
///
/// let dates = extract_dates("Issued March 1, 2022; due 04/15/2022").unwrap();
/// assert_eq!(dates, vec!["04/15/2022"]);
///
/// let dates = extract_dates("Issued March 1, 2022").unwrap();
/// assert_eq!(dates, vec!["March 1, 2022"]);
///
/// assert!(extract_dates("no dates here").is_none());
/// ```
pub fn extract_dates(text: &str) -> Option<Vec<String>> {
    let numeric = find_all(&RE_NUMERIC_DATE, text);
    if !numeric.is_empty() {
        return Some(numeric);
    }

    let named = find_all(&RE_MONTH_DATE, text);
    if named.is_empty() {
        None
    } else {
        Some(named)
    }
}

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
