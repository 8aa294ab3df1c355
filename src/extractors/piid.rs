//! Procurement Instrument Identifier (PIID) extraction.
//!
//! PIIDs are upper-case alphanumeric identifiers, usually hyphenated, such as
//! `GS-35F-0119Y` or `70CMSD22C00000001`. A token qualifies when, ignoring
//! hyphens, it mixes digits and letters, and its raw length is at least
//! [`MIN_PIID_LEN`]. Pure numbers (phone numbers, amounts) and pure words
//! (headings in capitals) are rejected.

use crate::error::Result;
use crate::loader::{TextLoader, TextSource};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Minimum raw token length, hyphens included.
pub const MIN_PIID_LEN: usize = 10;

lazy_static! {
    static ref RE_PIID_TOKEN: Regex = Regex::new(r"\b[0-9A-Z-]+\b").unwrap();
}

/// Extract the set of PIID candidates in `text`.
///
/// # Examples
///
/// ```
/// use contract_oxide::extractors::extract_piid;
///
/// assert!(extract_piid("ABC123").is_empty());
/// assert!(extract_piid("Order ABC123-DEF456 issued").contains("ABC123-DEF456"));
/// ```
pub fn extract_piid(text: &str) -> BTreeSet<String> {
    RE_PIID_TOKEN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| is_piid(token))
        .map(str::to_string)
        .collect()
}

fn is_piid(token: &str) -> bool {
    if token.len() < MIN_PIID_LEN {
        return false;
    }

    let stripped: String = token.chars().filter(|&c| c != '-').collect();
    let all_digits = stripped.chars().all(|c| c.is_ascii_digit());
    let all_letters = stripped.chars().all(|c| c.is_ascii_alphabetic());

    !(stripped.is_empty() || all_digits || all_letters)
}

/// PIIDs found for one file, split by where they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PiidSearch {
    /// PIIDs in the file contents
    pub within_file: BTreeSet<String>,
    /// PIIDs in the file name (without extension)
    pub in_file_name: BTreeSet<String>,
    /// PIIDs in the parent directory path
    pub in_folder_name: BTreeSet<String>,
}

/// Search for PIIDs in a file's contents, its name and its folder path.
///
/// Contract files are often filed under folders named after the award, so the
/// path is as informative as the text. Loader failures propagate.
pub fn search_piid<L: TextLoader + ?Sized>(path: &Path, loader: &L) -> Result<PiidSearch> {
    let text = loader.load(&TextSource::Path(path.to_path_buf()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = PiidSearch {
        within_file: extract_piid(&text),
        in_file_name: extract_piid(&stem),
        in_folder_name: extract_piid(&folder),
    };
    log::debug!(
        "PIID search in {}: {} in file, {} in name, {} in folder",
        path.display(),
        result.within_file.len(),
        result.in_file_name.len(),
        result.in_folder_name.len()
    );

    Ok(result)
}
