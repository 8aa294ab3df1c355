//! Integration tests for layout analysis over first-page elements.
//!
//! Coordinates follow PDF conventions: origin at the bottom-left of a
//! 612 x 792 point letter page.

use contract_oxide::geometry::Rect;
use contract_oxide::layout::{
    first_page_elements, FormRegion, InMemoryLayout, LayoutAnalyzer, PageElement,
    PageLayoutSource,
};
use contract_oxide::Error;

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Element on page 1 whose top edge sits at `y1`.
fn line_at(y1: f64, text: &str) -> PageElement {
    PageElement::new(1, Rect::new(72.0, y1 - 12.0, 540.0, y1), text)
}

/// A standard form cover page: form number in the footer, signature block
/// mid-page, a second page that must not be read.
fn cover_page() -> InMemoryLayout {
    InMemoryLayout::new(vec![
        line_at(750.0, "SOLICITATION/CONTRACT/ORDER FOR COMMERCIAL ITEMS"),
        line_at(400.0, "See Form 1449 instructions in block 12"),
        line_at(
            300.0,
            "Digitally signed by\nJANE Q. OFFICER\nDate: 2022.03.14 10:02:11 -04'00'",
        ),
        line_at(280.0, "Digitally signed by jane DOE"),
        line_at(150.0, "STANDARD FORM  1449 (REV. 2/2012)"),
        PageElement::new(2, Rect::new(72.0, 20.0, 540.0, 40.0), "FORM 30 on page two"),
    ])
}

// ============================================================================
// Page Bounding Box
// ============================================================================

mod page_bbox {
    use super::*;

    #[test]
    fn test_union_of_boxes() {
        let elements = vec![
            PageElement::new(1, Rect::new(0.0, 0.0, 10.0, 10.0), "a"),
            PageElement::new(1, Rect::new(5.0, 5.0, 20.0, 20.0), "b"),
        ];
        let bbox = LayoutAnalyzer::new().page_bbox(&elements).unwrap();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_empty_is_error() {
        let elements: Vec<PageElement> = Vec::new();
        let err = LayoutAnalyzer::new().page_bbox(&elements).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }
}

// ============================================================================
// Form Type
// ============================================================================

mod form_type {
    use super::*;

    #[test]
    fn test_mid_page_match_ignored() {
        let elements = vec![line_at(400.0, "FORM 1449")];
        assert_eq!(LayoutAnalyzer::new().form_type(&elements), None);
    }

    #[test]
    fn test_footer_and_header_accepted() {
        let analyzer = LayoutAnalyzer::new();
        assert_eq!(
            analyzer.form_type(&[line_at(150.0, "FORM 1449")]).as_deref(),
            Some("FORM 1449")
        );
        assert_eq!(
            analyzer.form_type(&[line_at(750.0, "Form 26")]).as_deref(),
            Some("FORM 26")
        );
    }

    #[test]
    fn test_lowercase_f_not_a_form() {
        let elements = vec![line_at(150.0, "see form 1449")];
        assert_eq!(LayoutAnalyzer::new().form_type(&elements), None);
    }

    #[test]
    fn test_custom_region() {
        let analyzer = LayoutAnalyzer::with_region(FormRegion {
            low: 450.0,
            high: 700.0,
        });
        let elements = vec![line_at(400.0, "FORM 1449")];
        assert_eq!(analyzer.form_type(&elements).as_deref(), Some("FORM 1449"));
    }

    #[test]
    fn test_first_margin_hit_wins() {
        let page: Vec<PageElement> = first_page_elements(&cover_page()).collect();
        assert_eq!(LayoutAnalyzer::new().form_type(&page).as_deref(), Some("FORM 1449"));
    }
}

// ============================================================================
// Digital Signatures
// ============================================================================

mod signatures {
    use super::*;

    #[test]
    fn test_signers_capitalised_and_unique() {
        let elements = vec![
            line_at(300.0, "Digitally signed by\nJANE Q. OFFICER"),
            line_at(280.0, "digitally   signed by jane"),
            line_at(260.0, "Approved"),
        ];
        let (signers, signatures) = LayoutAnalyzer::new().digital_signatures(&elements);
        assert_eq!(signers.into_iter().collect::<Vec<_>>(), vec!["Jane".to_string()]);
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0], "Digitally signed by\nJANE Q. OFFICER");
    }

    #[test]
    fn test_no_signatures() {
        let elements = vec![line_at(300.0, "Contracting Officer")];
        let (signers, signatures) = LayoutAnalyzer::new().digital_signatures(&elements);
        assert!(signers.is_empty());
        assert!(signatures.is_empty());
    }
}

// ============================================================================
// Full Analysis
// ============================================================================

mod analysis {
    use super::*;

    #[test]
    fn test_first_page_only() {
        let source = cover_page();
        assert_eq!(source.elements().count(), 6);
        assert_eq!(first_page_elements(&source).count(), 5);
    }

    #[test]
    fn test_cover_page_record() {
        let page: Vec<PageElement> = first_page_elements(&cover_page()).collect();
        let record = LayoutAnalyzer::new().analyze(&page).unwrap();

        assert_eq!(record.bbox, Rect::new(72.0, 138.0, 540.0, 750.0));
        assert_eq!(record.form_type.as_deref(), Some("FORM 1449"));
        assert_eq!(
            record.signers.iter().cloned().collect::<Vec<_>>(),
            vec!["Jane".to_string()]
        );
        assert_eq!(record.signatures.len(), 2);
    }

    #[test]
    fn test_record_json_skips_missing_form() {
        let page = vec![line_at(400.0, "Digitally signed by SMITH")];
        let record = LayoutAnalyzer::new().analyze(&page).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("form_type").is_none());
        assert_eq!(json["signers"], serde_json::json!(["Smith"]));
    }

    #[test]
    fn test_source_analysis_reads_every_page() {
        let record = LayoutAnalyzer::new().analyze_source(&cover_page()).unwrap();
        assert_eq!(record.bbox.y0, 20.0);
    }
}
