//! Page-level metadata derived from element geometry and text.
//!
//! Form numbers ("Form 1449", "FORM 26") are only trusted when they sit in a
//! page margin band; body text that merely mentions a form would otherwise be
//! taken as the document's own form type. Digital signature blocks are found
//! by their "Digitally signed by <name>" stamp.

use super::element::{PageElement, PageLayoutSource};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::text::collapse_whitespace;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeSet;

lazy_static! {
    /// "Form" with a capital F, then 1-5 digits
    static ref RE_FORM: Regex = Regex::new(r"\bF[Oo][Rr][Mm]\s+[0-9]{1,5}").unwrap();

    static ref RE_SIGNATURE: Regex = Regex::new(r"(?i)digitally\s+signed\s+by").unwrap();

    /// Signer name: the word after the stamp, on whitespace-collapsed text
    static ref RE_SIGNER: Regex = Regex::new(r"(?i)digitally\ssigned\sby\s(\w+)").unwrap();
}

/// Vertical band limits for trusted form numbers.
///
/// An element qualifies when the upper edge of its box (`y1`) is below `low`
/// or above `high`. With PDF coordinates (origin bottom-left, 792pt letter
/// pages) these are the footer and header bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRegion {
    /// Elements whose `y1` is below this are in the lower margin
    pub low: f64,
    /// Elements whose `y1` is above this are in the upper margin
    pub high: f64,
}

impl Default for FormRegion {
    fn default() -> Self {
        Self {
            low: 200.0,
            high: 700.0,
        }
    }
}

impl FormRegion {
    /// Whether a box lies in one of the margin bands.
    pub fn contains(&self, bbox: &Rect) -> bool {
        bbox.y1 < self.low || bbox.y1 > self.high
    }
}

/// Layout-derived metadata of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRecord {
    /// Smallest box enclosing every element
    pub bbox: Rect,
    /// Normalised form label, e.g. `"FORM 1449"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    /// Unique capitalised signer names
    pub signers: BTreeSet<String>,
    /// Text of every element carrying a signature stamp, in document order
    pub signatures: Vec<String>,
}

/// Analyzer for page elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutAnalyzer {
    region: FormRegion,
}

impl LayoutAnalyzer {
    /// Analyzer with the default margin bands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom margin bands.
    pub fn with_region(region: FormRegion) -> Self {
        Self { region }
    }

    /// Smallest box enclosing all elements.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_oxide::geometry::Rect;
    /// use contract_oxide::layout::{LayoutAnalyzer, PageElement};
    ///
    /// let elements = vec![
    ///     PageElement::new(1, Rect::new(0.0, 0.0, 10.0, 10.0), "a"),
    ///     PageElement::new(1, Rect::new(5.0, 5.0, 20.0, 20.0), "b"),
    /// ];
    /// let bbox = LayoutAnalyzer::new().page_bbox(&elements).unwrap();
    /// assert_eq!(bbox.to_tuple(), (0.0, 0.0, 20.0, 20.0));
    /// ```
    pub fn page_bbox<I>(&self, elements: I) -> Result<Rect>
    where
        I: IntoIterator,
        I::Item: Borrow<PageElement>,
    {
        Rect::enclosing(elements.into_iter().map(|e| {
            let e: &PageElement = e.borrow();
            e.bbox
        }))
        .ok_or_else(|| Error::EmptyInput("no page elements to enclose".to_string()))
    }

    /// Form label of the first margin element mentioning a form number.
    ///
    /// Scanning stops at the first hit. The label is whitespace-collapsed and
    /// upper-cased.
    pub fn form_type<I>(&self, elements: I) -> Option<String>
    where
        I: IntoIterator,
        I::Item: Borrow<PageElement>,
    {
        for element in elements {
            let element: &PageElement = element.borrow();
            if !self.region.contains(&element.bbox) {
                continue;
            }
            if let Some(m) = RE_FORM.find(&element.text) {
                let form = collapse_whitespace(m.as_str()).to_uppercase();
                log::debug!("Form type {} on page {}", form, element.page_id);
                return Some(form);
            }
        }
        None
    }

    /// Signer names and the signature texts they came from.
    pub fn digital_signatures<I>(&self, elements: I) -> (BTreeSet<String>, Vec<String>)
    where
        I: IntoIterator,
        I::Item: Borrow<PageElement>,
    {
        let mut signatures = Vec::new();
        for element in elements {
            let element: &PageElement = element.borrow();
            if RE_SIGNATURE.is_match(&element.text) {
                signatures.push(element.text.clone());
            }
        }

        let signers = signatures
            .iter()
            .flat_map(|signature| {
                let normalized = collapse_whitespace(signature);
                RE_SIGNER
                    .captures_iter(&normalized)
                    .map(|c| capitalize(&c[1]))
                    .collect::<Vec<_>>()
            })
            .collect();

        (signers, signatures)
    }

    /// Bounding box, form type and signatures in one record.
    pub fn analyze(&self, elements: &[PageElement]) -> Result<LayoutRecord> {
        let bbox = self.page_bbox(elements)?;
        let form_type = self.form_type(elements);
        let (signers, signatures) = self.digital_signatures(elements);

        Ok(LayoutRecord {
            bbox,
            form_type,
            signers,
            signatures,
        })
    }

    /// Collect a source's elements and analyze them.
    pub fn analyze_source<S: PageLayoutSource + ?Sized>(&self, source: &S) -> Result<LayoutRecord> {
        let elements: Vec<PageElement> = source.elements().collect();
        self.analyze(&elements)
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_y(y1: f64, text: &str) -> PageElement {
        PageElement::new(1, Rect::new(50.0, y1 - 12.0, 300.0, y1), text)
    }

    #[test]
    fn test_page_bbox() {
        let elements = vec![
            PageElement::new(1, Rect::new(0.0, 0.0, 10.0, 10.0), "a"),
            PageElement::new(1, Rect::new(5.0, 5.0, 20.0, 20.0), "b"),
        ];
        let bbox = LayoutAnalyzer::new().page_bbox(&elements).unwrap();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_page_bbox_matches_enclosing_box() {
        let elements = vec![at_y(700.0, "header"), at_y(150.0, "footer"), at_y(400.0, "body")];
        let boxes: Vec<Rect> = elements.iter().map(|e| e.bbox).collect();
        assert_eq!(
            LayoutAnalyzer::new().page_bbox(&elements).ok(),
            Rect::enclosing(&boxes)
        );
    }

    #[test]
    fn test_page_bbox_empty_is_error() {
        let elements: Vec<PageElement> = Vec::new();
        let err = LayoutAnalyzer::new().page_bbox(&elements).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn test_form_in_margins_only() {
        let analyzer = LayoutAnalyzer::new();
        assert_eq!(analyzer.form_type(&[at_y(400.0, "see Form 1449")]), None);
        assert_eq!(
            analyzer.form_type(&[at_y(150.0, "STANDARD Form 1449")]),
            Some("FORM 1449".to_string())
        );
        assert_eq!(
            analyzer.form_type(&[at_y(750.0, "FORM\n  26")]),
            Some("FORM 26".to_string())
        );
    }

    #[test]
    fn test_form_first_hit_wins() {
        let elements = vec![
            at_y(400.0, "Form 9999 in the body"),
            at_y(750.0, "Form 33"),
            at_y(100.0, "Form 1449"),
        ];
        assert_eq!(LayoutAnalyzer::new().form_type(&elements), Some("FORM 33".to_string()));
    }

    #[test]
    fn test_form_requires_capital_f() {
        assert_eq!(LayoutAnalyzer::new().form_type(&[at_y(100.0, "form 1449")]), None);
    }

    #[test]
    fn test_form_number_capped_at_five_digits() {
        assert_eq!(
            LayoutAnalyzer::new().form_type(&[at_y(100.0, "Form 1234567")]),
            Some("FORM 12345".to_string())
        );
    }

    #[test]
    fn test_custom_region() {
        let analyzer = LayoutAnalyzer::with_region(FormRegion {
            low: 50.0,
            high: 900.0,
        });
        assert_eq!(analyzer.form_type(&[at_y(150.0, "Form 1449")]), None);
    }

    #[test]
    fn test_digital_signatures() {
        let elements = vec![
            at_y(100.0, "Digitally signed by JOHN SMITH\nDate: 2022.06.21"),
            at_y(500.0, "Body text"),
            at_y(90.0, "digitally  signed\nby john"),
        ];
        let (signers, signatures) = LayoutAnalyzer::new().digital_signatures(&elements);
        assert_eq!(signers.into_iter().collect::<Vec<_>>(), vec!["John"]);
        assert_eq!(signatures.len(), 2);
        assert!(signatures[1].contains("signed\nby"));
    }

    #[test]
    fn test_analyze() {
        let elements = vec![
            PageElement::new(1, Rect::new(36.0, 740.0, 300.0, 760.0), "STANDARD FORM 26"),
            PageElement::new(1, Rect::new(36.0, 300.0, 576.0, 500.0), "Award/Contract"),
            PageElement::new(1, Rect::new(36.0, 40.0, 200.0, 60.0), "Digitally signed by Dawn"),
        ];
        let record = LayoutAnalyzer::new().analyze(&elements).unwrap();
        assert_eq!(record.bbox, Rect::new(36.0, 40.0, 576.0, 760.0));
        assert_eq!(record.form_type.as_deref(), Some("FORM 26"));
        assert!(record.signers.contains("Dawn"));
        assert_eq!(record.signatures, vec!["Digitally signed by Dawn"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mcDONALD"), "Mcdonald");
        assert_eq!(capitalize(""), "");
    }
}
