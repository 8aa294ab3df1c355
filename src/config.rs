//! Configuration for document extraction.

use crate::extractors::SectionLocator;
use crate::keywords::{KeywordStrategy, RakeConfig, TextRankConfig, TfidfConfig};
use crate::layout::FormRegion;

/// Extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Keyword backend used by the aggregator.
    pub keyword_strategy: KeywordStrategy,

    /// RAKE settings.
    pub rake: RakeConfig,

    /// TextRank settings.
    pub textrank: TextRankConfig,

    /// TF-IDF settings.
    pub tfidf: TfidfConfig,

    /// Paragraphs kept after a statement-of-work heading.
    pub sow_paragraphs: usize,

    /// Paragraphs kept after an evaluation-factor heading.
    pub evaluation_paragraphs: usize,

    /// Margin bands trusted for form numbers.
    pub form_region: FormRegion,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        let sections = SectionLocator::default();
        Self {
            keyword_strategy: KeywordStrategy::default(),
            rake: RakeConfig::default(),
            textrank: TextRankConfig::default(),
            tfidf: TfidfConfig::default(),
            sow_paragraphs: sections.sow_paragraphs,
            evaluation_paragraphs: sections.evaluation_paragraphs,
            form_region: FormRegion::default(),
        }
    }

    /// Select the keyword backend.
    pub fn with_keyword_strategy(mut self, strategy: KeywordStrategy) -> Self {
        self.keyword_strategy = strategy;
        self
    }

    /// Replace the RAKE settings.
    pub fn with_rake(mut self, rake: RakeConfig) -> Self {
        self.rake = rake;
        self
    }

    /// Replace the TextRank settings.
    pub fn with_textrank(mut self, textrank: TextRankConfig) -> Self {
        self.textrank = textrank;
        self
    }

    /// Replace the TF-IDF settings.
    pub fn with_tfidf(mut self, tfidf: TfidfConfig) -> Self {
        self.tfidf = tfidf;
        self
    }

    /// Set section window sizes.
    pub fn with_section_paragraphs(mut self, sow: usize, evaluation: usize) -> Self {
        self.sow_paragraphs = sow;
        self.evaluation_paragraphs = evaluation;
        self
    }

    /// Set the form-number margin bands.
    pub fn with_form_region(mut self, region: FormRegion) -> Self {
        self.form_region = region;
        self
    }

    /// Section locator for these window sizes.
    pub fn section_locator(&self) -> SectionLocator {
        SectionLocator::new()
            .with_sow_paragraphs(self.sow_paragraphs)
            .with_evaluation_paragraphs(self.evaluation_paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.keyword_strategy, KeywordStrategy::Rake);
        assert_eq!(config.sow_paragraphs, 2);
        assert_eq!(config.evaluation_paragraphs, 5);
        assert_eq!(config.form_region, FormRegion::default());
        assert_eq!(config.tfidf.max_features, Some(2000));
    }

    #[test]
    fn test_builder() {
        let config = ExtractionConfig::new()
            .with_keyword_strategy(KeywordStrategy::TfIdf)
            .with_section_paragraphs(3, 4);
        assert_eq!(config.keyword_strategy, KeywordStrategy::TfIdf);

        let locator = config.section_locator();
        assert_eq!(locator.sow_paragraphs, 3);
        assert_eq!(locator.evaluation_paragraphs, 4);
    }
}
