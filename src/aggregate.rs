//! Best-effort extraction of one record per document.
//!
//! The aggregator runs title, date and keyword extraction in that order.
//! A field whose extractor fails is logged and left out of the record; the
//! other fields are still returned.
//!
//! Failures go to a caller-supplied [`log::Log`] sink rather than straight
//! to the global logger, so embedding applications decide where they land.
//! [`GlobalSink`] forwards to whatever logger the process installed.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractors::{extract_dates, extract_title};
use crate::keywords::{KeywordExtractor, KeywordStrategy};
use crate::text::{SnowballAnalyzer, TextAnalyzer};
use log::{Level, Log, Metadata, Record};
use serde::Serialize;

/// Log target used for field failures.
pub const LOG_TARGET: &str = "contract_oxide::aggregate";

/// Extraction result for one document.
///
/// A `None` field was either not found or failed; failures are reported
/// through the aggregator's sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionRecord {
    /// Title span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Date mentions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<String>>,
    /// Keywords from the configured strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Sink that forwards to the process-wide logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSink;

impl Log for GlobalSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

/// Runs the text extractors over a document.
pub struct Aggregator<A: TextAnalyzer = SnowballAnalyzer> {
    keywords: KeywordExtractor<A>,
    strategy: KeywordStrategy,
    sink: Box<dyn Log>,
}

impl Aggregator<SnowballAnalyzer> {
    /// Aggregator with default configuration, logging to the global logger.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Aggregator for `config`, logging to the global logger.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            keywords: KeywordExtractor::from_config(config),
            strategy: config.keyword_strategy,
            sink: Box::new(GlobalSink),
        }
    }
}

impl Default for Aggregator<SnowballAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TextAnalyzer> Aggregator<A> {
    /// Aggregator around an already configured keyword extractor.
    pub fn with_keywords(keywords: KeywordExtractor<A>, strategy: KeywordStrategy) -> Self {
        Self {
            keywords,
            strategy,
            sink: Box::new(GlobalSink),
        }
    }

    /// Send field failures to `sink`.
    pub fn with_sink(mut self, sink: Box<dyn Log>) -> Self {
        self.sink = sink;
        self
    }

    /// Keyword strategy in use
    pub fn strategy(&self) -> KeywordStrategy {
        self.strategy
    }

    /// Extract title, dates and keywords from `text`.
    pub fn extract_all(&self, text: &str) -> ExtractionRecord {
        ExtractionRecord {
            title: self.field("title", || Ok(extract_title(text))),
            dates: self.field("dates", || Ok(extract_dates(text))),
            keywords: self.field("keywords", || {
                self.keywords.extract(text, self.strategy).map(Some)
            }),
        }
    }

    fn field<T>(&self, name: &str, extract: impl FnOnce() -> Result<Option<T>>) -> Option<T> {
        match extract() {
            Ok(value) => value,
            Err(e) => {
                self.sink.log(
                    &Record::builder()
                        .args(format_args!("{} extraction failed: {}", name, e))
                        .level(Level::Error)
                        .target(LOG_TARGET)
                        .module_path_static(Some(module_path!()))
                        .file_static(Some(file!()))
                        .line(Some(line!()))
                        .build(),
                );
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CaptureSink(Arc<Mutex<Vec<String>>>);

    impl Log for CaptureSink {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.0
                .lock()
                .unwrap()
                .push(format!("{} {} {}", record.level(), record.target(), record.args()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_all_fields() {
        let text = "Help Desk Support\nIntroduction\nIssued 03/01/2022. The contractor provides help desk support.";
        let record = Aggregator::new().extract_all(text);
        assert_eq!(record.title.as_deref(), Some("Help Desk Support "));
        assert_eq!(record.dates, Some(vec!["03/01/2022".to_string()]));
        assert!(record.keywords.is_some_and(|k| !k.is_empty()));
    }

    #[test]
    fn test_failed_field_is_absent_and_logged() {
        let sink = CaptureSink::default();
        let config = ExtractionConfig::new().with_keyword_strategy(KeywordStrategy::TfIdf);
        let aggregator = Aggregator::with_config(&config).with_sink(Box::new(sink.clone()));

        // Only stopwords: the vectorizer has no vocabulary to fit
        let record = aggregator.extract_all("The\nof the\nand");
        assert!(record.keywords.is_none());
        assert!(record.title.is_none());

        let messages = sink.0.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("ERROR contract_oxide::aggregate keywords extraction failed"));
    }

    #[test]
    fn test_absent_fields_skipped_in_json() {
        let record = ExtractionRecord {
            title: None,
            dates: Some(vec!["1/2/2020".to_string()]),
            keywords: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"dates":["1/2/2020"]}"#);
    }
}
