// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![warn(missing_docs)]

//! # Contract Oxide
//!
//! Feature extraction for procurement documents: contracts, statements of
//! work and solicitations that have already been converted to plain text or
//! to positioned page elements.
//!
//! ## Core Features
//!
//! - **Normalisation**: line-break repair, URL stripping, whitespace collapse
//! - **Pattern Extractors**: titles, dates, PIIDs, statement-of-work and
//!   evaluation-factor sections
//! - **Keywords**: RAKE, TextRank and TF-IDF over a Snowball stemmer
//! - **Layout**: page bounding box, form number and digital-signature
//!   detection from first-page elements
//! - **Aggregation**: one best-effort [`ExtractionRecord`] per document,
//!   with per-field failure isolation
//! - **Discovery**: recursive file search and authoritative-version
//!   selection in contract folders
//!
//! ## Quick Start
//!
//! ```ignore
//! use contract_oxide::{Aggregator, ExtractionConfig, KeywordStrategy};
//! use contract_oxide::text::remove_line_breaks;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = std::fs::read_to_string("award.txt")?;
//! let text = remove_line_breaks(&raw);
//!
//! let config = ExtractionConfig::new().with_keyword_strategy(KeywordStrategy::TextRank);
//! let record = Aggregator::with_config(&config).extract_all(&text);
//! println!("{}", serde_json::to_string_pretty(&record)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade. Field failures during
//! aggregation are sent to the aggregator's sink under the
//! [`aggregate::LOG_TARGET`] target.

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry
pub mod geometry;

// Text normalisation and analysis
pub mod text;

// Pattern extractors
pub mod extractors;

// Keyword extraction
pub mod keywords;

// Page layout analysis
pub mod layout;

// Text loading
pub mod loader;

// Per-document aggregation
pub mod aggregate;

// File discovery
pub mod discovery;

// Re-exports
pub use aggregate::{Aggregator, ExtractionRecord};
pub use config::ExtractionConfig;
pub use error::{Error, Result};
pub use geometry::Rect;
pub use keywords::{KeywordExtractor, KeywordStrategy, RankedPhrase};
pub use layout::{LayoutAnalyzer, LayoutRecord, PageElement};
pub use loader::{PlainTextLoader, TextLoader, TextSource};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Compare two scores, treating NaN as equal to itself and greater than
    /// every number so sorts never panic.
    #[inline]
    pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f64::NAN, f64::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f64::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f64::NAN), Ordering::Less);
        }
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
