//! Pattern-driven extractors over document text.
//!
//! Each extractor is a pure function of its input text; none of them share
//! state, so they can run in any order or in parallel across documents.
//!
//! - [`dates`]: numeric and month-name date mentions
//! - [`title`]: title span preceding the first structural anchor or date
//! - [`piid`]: procurement instrument identifiers
//! - [`sections`]: statement-of-work and evaluation-factor windows

pub mod dates;
pub mod piid;
pub mod sections;
pub mod title;

pub use dates::extract_dates;
pub use piid::{extract_piid, search_piid, PiidSearch};
pub use sections::{
    contain_evaluation_factors, extract_evaluation_factors, extract_sow, SectionLocator,
};
pub use title::extract_title;
