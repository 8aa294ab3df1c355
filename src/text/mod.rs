//! Text normalisation and tokenisation.
//!
//! - [`normalize`]: line-break collapsing, URL stripping, whitespace cleanup
//! - [`analyzer`]: sentence/word splitting and stemming used by the keyword strategies

pub mod analyzer;
pub mod normalize;

pub use analyzer::{tokenize_and_stem, tokenize_only, SnowballAnalyzer, TextAnalyzer};
pub use normalize::{collapse_whitespace, remove_line_breaks, remove_url};
