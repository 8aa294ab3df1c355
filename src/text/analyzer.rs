//! Sentence/word splitting and stemming.
//!
//! The keyword strategies only need three primitives from a tokenizer: split
//! text into sentences, split a sentence into words and reduce a word to its
//! stem. [`TextAnalyzer`] is that seam; [`SnowballAnalyzer`] is the default
//! implementation built on Unicode segmentation rules and the Snowball English
//! stemmer.

use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashSet;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer/stemmer used by the keyword strategies.
pub trait TextAnalyzer {
    /// Split text into sentence spans.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split a sentence into word tokens. Punctuation-only tokens are dropped.
    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str>;

    /// Reduce a token to its stem.
    fn stem(&self, token: &str) -> String;
}

/// Unicode sentence/word bounds plus Snowball English stemming.
pub struct SnowballAnalyzer {
    stemmer: Stemmer,
}

impl SnowballAnalyzer {
    /// Create an analyzer with the English stemmer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SnowballAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballAnalyzer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl TextAnalyzer for SnowballAnalyzer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }

    fn stem(&self, token: &str) -> String {
        self.stemmer.stem(&token.to_lowercase()).into_owned()
    }
}

fn has_ascii_letter(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Tokenize by sentence then by word, drop tokens without letters and
/// stopwords, and stem what remains.
///
/// # Examples
///
/// ```
/// use contract_oxide::text::{tokenize_and_stem, SnowballAnalyzer};
///
/// let analyzer = SnowballAnalyzer::new();
/// let stems = tokenize_and_stem(&analyzer, "Running 42 reports.", None);
/// assert_eq!(stems, vec!["run", "report"]);
/// ```
pub fn tokenize_and_stem<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: Option<&FxHashSet<String>>,
) -> Vec<String> {
    analyzer
        .sentences(text)
        .into_iter()
        .flat_map(|sentence| analyzer.words(sentence))
        .filter(|token| has_ascii_letter(token))
        .filter(|token| stopwords.map_or(true, |sw| !sw.contains(*token)))
        .map(|token| analyzer.stem(token))
        .collect()
}

/// Like [`tokenize_and_stem`] but lower-cases instead of stemming.
pub fn tokenize_only<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: Option<&FxHashSet<String>>,
) -> Vec<String> {
    analyzer
        .sentences(text)
        .into_iter()
        .flat_map(|sentence| analyzer.words(sentence))
        .map(str::to_lowercase)
        .filter(|token| has_ascii_letter(token))
        .filter(|token| stopwords.map_or(true, |sw| !sw.contains(token)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences() {
        let analyzer = SnowballAnalyzer::new();
        let sentences = analyzer.sentences("The vendor shall deliver. Payment follows! Done?");
        assert_eq!(sentences, vec!["The vendor shall deliver.", "Payment follows!", "Done?"]);
    }

    #[test]
    fn test_words_drop_punctuation() {
        let analyzer = SnowballAnalyzer::new();
        assert_eq!(analyzer.words("Hello, world; again."), vec!["Hello", "world", "again"]);
    }

    #[test]
    fn test_stem_lowercases() {
        let analyzer = SnowballAnalyzer::new();
        assert_eq!(analyzer.stem("Contracts"), "contract");
    }

    #[test]
    fn test_tokenize_and_stem_stopwords() {
        let analyzer = SnowballAnalyzer::new();
        let stopwords: FxHashSet<String> = ["the".to_string()].into_iter().collect();
        let stems = tokenize_and_stem(&analyzer, "the services were delivered", Some(&stopwords));
        assert_eq!(stems, vec!["servic", "were", "deliv"]);
    }

    #[test]
    fn test_tokenize_only() {
        let analyzer = SnowballAnalyzer::new();
        let tokens = tokenize_only(&analyzer, "Task 1: Deliver Reports", None);
        assert_eq!(tokens, vec!["task", "deliver", "reports"]);
    }
}
