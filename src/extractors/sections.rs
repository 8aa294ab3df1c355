//! Statement-of-work and evaluation-factor locators.
//!
//! Both locators anchor on heading phrases and take a short window of the
//! text that follows, measured in paragraphs. A paragraph ends at a period
//! immediately followed by a line break, so these run best on text passed
//! through [`remove_line_breaks`](crate::text::remove_line_breaks).

use lazy_static::lazy_static;
use regex::Regex;

/// Paragraph delimiter used to cut windows.
const PARAGRAPH_BREAK: &str = ".\n";

lazy_static! {
    static ref RE_SOW_ANCHOR: Regex = Regex::new(
        r"(?im)(statement\s+of\s+work|statement\s+objectives?|performance\s+work\s+statement)"
    )
    .unwrap();

    static ref RE_EVALUATION_ANCHOR: Regex =
        Regex::new(r"(?im)evaluation\s+(factor|criteria)").unwrap();

    /// Evaluative content check (case-sensitive)
    static ref RE_EVALUATIVE: Regex = Regex::new(r"evaluat(ion|ed|ing)").unwrap();
}

/// Locates section windows with configurable window sizes.
#[derive(Debug, Clone, Copy)]
pub struct SectionLocator {
    /// Paragraphs kept after each SOW anchor
    pub sow_paragraphs: usize,
    /// Paragraphs kept after each evaluation-factor anchor
    pub evaluation_paragraphs: usize,
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self {
            sow_paragraphs: 2,
            evaluation_paragraphs: 5,
        }
    }
}

impl SectionLocator {
    /// Create a locator with the default window sizes (2 and 5 paragraphs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SOW window size.
    pub fn with_sow_paragraphs(mut self, paragraphs: usize) -> Self {
        self.sow_paragraphs = paragraphs;
        self
    }

    /// Set the evaluation-factor window size.
    pub fn with_evaluation_paragraphs(mut self, paragraphs: usize) -> Self {
        self.evaluation_paragraphs = paragraphs;
        self
    }

    /// One window per SOW anchor, starting at the anchor itself.
    ///
    /// Windows of nearby anchors may overlap; they are not merged.
    pub fn sow(&self, text: &str) -> Vec<String> {
        RE_SOW_ANCHOR
            .find_iter(text)
            .map(|m| leading_paragraphs(&text[m.start()..], self.sow_paragraphs))
            .collect()
    }

    /// One window per evaluation-factor anchor, starting after the anchor.
    ///
    /// A window is kept only when it mentions "evaluation", "evaluated" or
    /// "evaluating", which filters out bare headings (e.g. table-of-contents
    /// entries) with nothing evaluative after them.
    pub fn evaluation_factors(&self, text: &str) -> Vec<String> {
        RE_EVALUATION_ANCHOR
            .find_iter(text)
            .map(|m| leading_paragraphs(&text[m.end()..], self.evaluation_paragraphs))
            .filter(|window| RE_EVALUATIVE.is_match(window))
            .collect()
    }
}

fn leading_paragraphs(text: &str, count: usize) -> String {
    text.split(PARAGRAPH_BREAK)
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

/// SOW windows with the default locator.
///
/// # Examples
///
/// ```
/// use contract_oxide::extractors::extract_sow;
///
/// let text = "1. Statement of Work.\nThe contractor shall staff a help desk.\nPricing follows.\n";
/// assert_eq!(
///     extract_sow(text),
///     vec!["Statement of Work The contractor shall staff a help desk"]
/// );
/// ```
pub fn extract_sow(text: &str) -> Vec<String> {
    SectionLocator::default().sow(text)
}

/// Evaluation-factor windows with the default locator.
pub fn extract_evaluation_factors(text: &str) -> Vec<String> {
    SectionLocator::default().evaluation_factors(text)
}

/// Whether the text has at least one evaluation-factor window.
pub fn contain_evaluation_factors(text: &str) -> bool {
    !extract_evaluation_factors(text).is_empty()
}
