//! TF-IDF term-document vectorizer.
//!
//! Fits a vocabulary of stemmed 1..n-grams over a collection of documents,
//! pruned by document frequency and capped by corpus frequency. The keyword
//! strategy only uses the vocabulary, which is sorted alphabetically and is
//! therefore not a ranking; the weights are kept on the fitted matrix for
//! callers that want them.

use super::stopwords::{StopwordSet, PROCUREMENT_STOPWORDS};
use crate::error::{Error, Result};
use crate::text::{tokenize_and_stem, TextAnalyzer};
use rustc_hash::{FxHashMap, FxHashSet};

/// A document-frequency bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocFrequency {
    /// Share of documents, in `[0, 1]`
    Proportion(f64),
    /// Absolute number of documents
    Count(usize),
}

impl DocFrequency {
    fn validate(&self, name: &str) -> Result<()> {
        match *self {
            DocFrequency::Proportion(p) if !(0.0..=1.0).contains(&p) => Err(
                Error::InvalidParameter(format!("{} proportion must be in [0, 1], got {}", name, p)),
            ),
            _ => Ok(()),
        }
    }

    fn to_count(self, n_documents: usize) -> f64 {
        match self {
            DocFrequency::Proportion(p) => p * n_documents as f64,
            DocFrequency::Count(c) => c as f64,
        }
    }
}

/// Configuration for the TF-IDF vectorizer
#[derive(Debug, Clone)]
pub struct TfidfConfig {
    /// Drop terms found in more documents than this
    pub max_df: DocFrequency,
    /// Drop terms found in fewer documents than this
    pub min_df: DocFrequency,
    /// Keep at most this many terms, by corpus frequency
    pub max_features: Option<usize>,
    /// Weight terms by inverse document frequency
    pub use_idf: bool,
    /// Smallest and largest n-gram size, in words
    pub ngram_range: (usize, usize),
    /// Stopwords added to the English list
    pub extra_stopwords: Vec<String>,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_df: DocFrequency::Proportion(0.8),
            min_df: DocFrequency::Proportion(0.04),
            max_features: Some(2000),
            use_idf: true,
            ngram_range: (1, 3),
            extra_stopwords: PROCUREMENT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TfidfConfig {
    /// Set both document-frequency bounds
    pub fn with_df(mut self, min_df: DocFrequency, max_df: DocFrequency) -> Self {
        self.min_df = min_df;
        self.max_df = max_df;
        self
    }

    /// Cap the vocabulary size (`None` for no cap)
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Set the n-gram range
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    /// Add stopwords on top of the English list and the current extras
    pub fn with_extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.extra_stopwords
            .extend(words.iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Enable or disable idf weighting
    pub fn with_idf(mut self, use_idf: bool) -> Self {
        self.use_idf = use_idf;
        self
    }

    /// English stopwords plus the extra list, stemmed with `analyzer`
    pub fn stopwords<A: TextAnalyzer + ?Sized>(&self, analyzer: &A) -> StopwordSet {
        StopwordSet::english()
            .with_extra(&self.extra_stopwords)
            .stemmed(analyzer)
    }

    fn validate(&self) -> Result<()> {
        self.max_df.validate("max_df")?;
        self.min_df.validate("min_df")?;
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::InvalidParameter(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        Ok(())
    }
}

/// A fitted term-document matrix.
#[derive(Debug, Clone)]
pub struct TermDocumentMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<Vec<(usize, f64)>>,
}

impl TermDocumentMatrix {
    /// Vocabulary terms, sorted alphabetically
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Consume the matrix, keeping only the vocabulary
    pub fn into_vocabulary(self) -> Vec<String> {
        self.vocabulary
    }

    /// Inverse document frequency per term (all 1.0 without idf weighting)
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents the matrix was fitted on
    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    /// L2-normalised `(term index, weight)` pairs of one document
    pub fn row(&self, document: usize) -> Option<&[(usize, f64)]> {
        self.rows.get(document).map(Vec::as_slice)
    }
}

/// Fits [`TermDocumentMatrix`]es with a fixed analyzer and stopword set.
pub struct TfidfVectorizer<'a, A: TextAnalyzer + ?Sized> {
    analyzer: &'a A,
    stopwords: &'a StopwordSet,
    config: TfidfConfig,
}

impl<'a, A: TextAnalyzer + ?Sized> TfidfVectorizer<'a, A> {
    /// Create a vectorizer. `stopwords` must already be stemmed.
    pub fn new(analyzer: &'a A, stopwords: &'a StopwordSet, config: TfidfConfig) -> Self {
        Self {
            analyzer,
            stopwords,
            config,
        }
    }

    /// N-gram counts of one document.
    fn count_terms(&self, document: &str) -> FxHashMap<String, usize> {
        let tokens: Vec<String> = tokenize_and_stem(self.analyzer, &document.to_lowercase(), None)
            .into_iter()
            .filter(|t| !self.stopwords.as_set().contains(t))
            .collect();

        let (min_n, max_n) = self.config.ngram_range;
        let mut counts = FxHashMap::default();
        for n in min_n..=max_n.min(tokens.len()) {
            for gram in tokens.windows(n) {
                *counts.entry(gram.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fit the vocabulary and weights over `documents`.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<TermDocumentMatrix> {
        self.config.validate()?;

        let doc_counts: Vec<FxHashMap<String, usize>> =
            documents.iter().map(|d| self.count_terms(d.as_ref())).collect();

        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        let mut tf: FxHashMap<&str, usize> = FxHashMap::default();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *df.entry(term.as_str()).or_insert(0) += 1;
                *tf.entry(term.as_str()).or_insert(0) += count;
            }
        }
        if df.is_empty() {
            return Err(Error::Vectorizer(
                "empty vocabulary; perhaps the documents only contain stop words".to_string(),
            ));
        }

        let n_documents = doc_counts.len();
        let max_count = self.config.max_df.to_count(n_documents);
        let min_count = self.config.min_df.to_count(n_documents);
        if max_count < min_count {
            return Err(Error::Vectorizer(
                "max_df corresponds to fewer documents than min_df".to_string(),
            ));
        }

        let mut terms: Vec<&str> = df
            .iter()
            .filter(|(_, &d)| d as f64 <= max_count && d as f64 >= min_count)
            .map(|(&t, _)| t)
            .collect();
        terms.sort_unstable();

        if let Some(limit) = self.config.max_features {
            if terms.len() > limit {
                // Stable sort keeps alphabetical order among equal frequencies
                let mut by_frequency = terms.clone();
                by_frequency.sort_by(|a, b| tf[b].cmp(&tf[a]));
                let keep: FxHashSet<&str> = by_frequency.into_iter().take(limit).collect();
                terms.retain(|t| keep.contains(t));
            }
        }

        if terms.is_empty() {
            return Err(Error::Vectorizer(
                "after pruning, no terms remain; try a lower min_df or a higher max_df".to_string(),
            ));
        }

        let index: FxHashMap<&str, usize> = terms.iter().enumerate().map(|(i, &t)| (t, i)).collect();
        let idf: Vec<f64> = terms
            .iter()
            .map(|t| {
                if self.config.use_idf {
                    ((1.0 + n_documents as f64) / (1.0 + df[t] as f64)).ln() + 1.0
                } else {
                    1.0
                }
            })
            .collect();

        let rows = doc_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<(usize, f64)> = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        index.get(term.as_str()).map(|&i| (i, count as f64 * idf[i]))
                    })
                    .collect();
                row.sort_by_key(|&(i, _)| i);
                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        log::debug!(
            "TF-IDF fitted {} terms over {} documents ({} candidates)",
            terms.len(),
            n_documents,
            df.len()
        );

        Ok(TermDocumentMatrix {
            vocabulary: terms.into_iter().map(str::to_string).collect(),
            idf,
            rows,
        })
    }
}
