//! Keyword extraction strategies.
//!
//! Three interchangeable backends sit behind [`KeywordExtractor`]:
//!
//! - [`rake`]: phrase co-occurrence ranking, highest score first
//! - [`textrank`]: graph centrality over word co-occurrence, highest score first
//! - [`tfidf`]: the vocabulary of a term-document matrix built from the lines of
//!   the text. This one is **not ranked**: terms come back in vocabulary order
//!   (alphabetical after stemming). Callers that need rank order should use
//!   one of the other two.
//!
//! The backend is picked with the [`KeywordStrategy`] enum; parsing an unknown
//! strategy name fails with [`Error::UnsupportedStrategy`].

pub mod graph;
pub mod rake;
pub mod stopwords;
pub mod textrank;
pub mod tfidf;

pub use rake::RakeConfig;
pub use stopwords::StopwordSet;
pub use textrank::TextRankConfig;
pub use tfidf::{DocFrequency, TermDocumentMatrix, TfidfConfig, TfidfVectorizer};

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::text::{SnowballAnalyzer, TextAnalyzer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of keywords shown by [`KeywordExtractor::preview`] by default.
pub const DEFAULT_PREVIEW_LEN: usize = 10;

/// Keyword extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeywordStrategy {
    /// Phrase co-occurrence ranking ("rake")
    #[default]
    #[serde(rename = "rake")]
    Rake,
    /// Graph centrality ranking ("textrank")
    #[serde(rename = "textrank")]
    TextRank,
    /// Corpus-frequency vocabulary ("tf-idf"), unranked
    #[serde(rename = "tf-idf")]
    TfIdf,
}

impl KeywordStrategy {
    /// Canonical name of the strategy
    pub fn name(&self) -> &'static str {
        match self {
            KeywordStrategy::Rake => "rake",
            KeywordStrategy::TextRank => "textrank",
            KeywordStrategy::TfIdf => "tf-idf",
        }
    }

    /// Whether results come back in descending score order
    pub fn is_ranked(&self) -> bool {
        match self {
            KeywordStrategy::Rake | KeywordStrategy::TextRank => true,
            KeywordStrategy::TfIdf => false,
        }
    }
}

impl fmt::Display for KeywordStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeywordStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rake" => Ok(KeywordStrategy::Rake),
            "textrank" => Ok(KeywordStrategy::TextRank),
            "tf-idf" | "tfidf" => Ok(KeywordStrategy::TfIdf),
            _ => Err(Error::UnsupportedStrategy(s.to_string())),
        }
    }
}

/// A keyword phrase and its strategy-specific score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhrase {
    /// The phrase, lower-cased
    pub phrase: String,
    /// Score; only comparable within one strategy and one document
    pub score: f64,
}

/// Strategy-selecting keyword extractor.
#[derive(Debug)]
pub struct KeywordExtractor<A: TextAnalyzer = SnowballAnalyzer> {
    analyzer: A,
    stopwords: StopwordSet,
    tfidf_stopwords: StopwordSet,
    rake: RakeConfig,
    textrank: TextRankConfig,
    tfidf: TfidfConfig,
}

impl KeywordExtractor<SnowballAnalyzer> {
    /// Extractor with the Snowball analyzer and default configurations.
    pub fn new() -> Self {
        Self::with_analyzer(SnowballAnalyzer::new())
    }

    /// Extractor with the Snowball analyzer and the strategy settings of `config`.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_configs(
            SnowballAnalyzer::new(),
            config.rake.clone(),
            config.textrank.clone(),
            config.tfidf.clone(),
        )
    }
}

impl Default for KeywordExtractor<SnowballAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TextAnalyzer> KeywordExtractor<A> {
    /// Extractor with a custom analyzer and default configurations.
    pub fn with_analyzer(analyzer: A) -> Self {
        Self::with_configs(
            analyzer,
            RakeConfig::default(),
            TextRankConfig::default(),
            TfidfConfig::default(),
        )
    }

    /// Extractor with a custom analyzer and all three strategy configurations.
    ///
    /// The stemmed TF-IDF stopword set is built once, here.
    pub fn with_configs(
        analyzer: A,
        rake: RakeConfig,
        textrank: TextRankConfig,
        tfidf: TfidfConfig,
    ) -> Self {
        let tfidf_stopwords = tfidf.stopwords(&analyzer);
        Self {
            analyzer,
            stopwords: StopwordSet::english(),
            tfidf_stopwords,
            rake,
            textrank,
            tfidf,
        }
    }

    /// Replace the RAKE configuration
    pub fn with_rake(mut self, config: RakeConfig) -> Self {
        self.rake = config;
        self
    }

    /// Replace the TextRank configuration
    pub fn with_textrank(mut self, config: TextRankConfig) -> Self {
        self.textrank = config;
        self
    }

    /// Replace the TF-IDF configuration; the stemmed stopword set is rebuilt
    pub fn with_tfidf(mut self, config: TfidfConfig) -> Self {
        self.tfidf_stopwords = config.stopwords(&self.analyzer);
        self.tfidf = config;
        self
    }

    /// The analyzer used for tokenizing and stemming
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Extract keywords from `text` with `strategy`.
    ///
    /// RAKE and TextRank return phrases in descending score order; TF-IDF
    /// returns its vocabulary in alphabetical order.
    pub fn extract(&self, text: &str, strategy: KeywordStrategy) -> Result<Vec<String>> {
        match strategy {
            KeywordStrategy::Rake | KeywordStrategy::TextRank => Ok(self
                .extract_ranked(text, strategy)?
                .into_iter()
                .map(|r| r.phrase)
                .collect()),
            KeywordStrategy::TfIdf => self.tfidf_vocabulary(text),
        }
    }

    /// Extract keywords with their scores.
    ///
    /// TF-IDF has no per-document ranking, so it is rejected here.
    pub fn extract_ranked(&self, text: &str, strategy: KeywordStrategy) -> Result<Vec<RankedPhrase>> {
        match strategy {
            KeywordStrategy::Rake => Ok(rake::rank_phrases(
                &self.analyzer,
                text,
                &self.stopwords,
                &self.rake,
            )),
            KeywordStrategy::TextRank => Ok(textrank::rank_keywords(
                &self.analyzer,
                text,
                &self.stopwords,
                &self.textrank,
            )),
            KeywordStrategy::TfIdf => Err(Error::Unsupported(
                "tf-idf keywords are an unranked vocabulary".to_string(),
            )),
        }
    }

    /// Each non-empty line is one document.
    fn tfidf_vocabulary(&self, text: &str) -> Result<Vec<String>> {
        let documents: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();
        let matrix = TfidfVectorizer::new(&self.analyzer, &self.tfidf_stopwords, self.tfidf.clone())
            .fit(&documents)?;
        Ok(matrix.into_vocabulary())
    }

    /// The first `n` keywords, each logged at info level.
    pub fn preview(&self, text: &str, strategy: KeywordStrategy, n: usize) -> Result<Vec<String>> {
        let mut keywords = self.extract(text, strategy)?;
        keywords.truncate(n);
        for keyword in &keywords {
            log::info!("[{}] {}", strategy, keyword);
        }
        Ok(keywords)
    }
}
