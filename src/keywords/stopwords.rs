//! Stopword sets
//!
//! English stopwords are the NLTK list from the `stop-words` crate. The
//! larger ISO list treats procurement vocabulary ("work", "order",
//! "information") as noise and is not used. The TF-IDF strategy
//! compares stopwords against stemmed tokens, so it uses a stemmed copy of the
//! list built with the same analyzer that tokenizes the documents.

use crate::text::{tokenize_and_stem, TextAnalyzer};
use lazy_static::lazy_static;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

lazy_static! {
    /// Parsed once; the crate decodes its embedded list on every `get`
    static ref ENGLISH: FxHashSet<String> =
        get(LANGUAGE::English).iter().map(|s| s.to_lowercase()).collect();
}

/// Words that never count toward procurement keywords on top of the English list.
pub const PROCUREMENT_STOPWORDS: &[&str] = &["shall", "pdf", "_x__"];

/// A set of lower-case stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// English stopwords
    pub fn english() -> Self {
        Self {
            words: ENGLISH.clone(),
        }
    }

    /// Stopwords from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add more words to the set
    pub fn with_extra<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.words
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check whether `word` (any case) is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Borrow the underlying set
    pub fn as_set(&self) -> &FxHashSet<String> {
        &self.words
    }

    /// Stem every stopword with `analyzer`.
    ///
    /// The words are joined and run through [`tokenize_and_stem`], so
    /// multi-part entries split the same way document text does.
    pub fn stemmed<A: TextAnalyzer + ?Sized>(&self, analyzer: &A) -> Self {
        let mut sorted: Vec<&str> = self.words.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        let joined = sorted.join(" ");

        Self {
            words: tokenize_and_stem(analyzer, &joined, None).into_iter().collect(),
        }
    }
}
