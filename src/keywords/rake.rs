//! RAKE: Rapid Automatic Keyword Extraction.
//!
//! Candidate phrases are maximal runs of words between stopwords and
//! punctuation. Each word gets `degree / frequency`, where degree counts the
//! words it shares phrases with (itself included) and frequency counts its
//! occurrences. A phrase scores the sum of its word scores.

use super::stopwords::StopwordSet;
use super::RankedPhrase;
use crate::text::TextAnalyzer;
use crate::utils::safe_float_cmp;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashSet;

lazy_static! {
    /// Word runs or punctuation runs
    static ref RE_WORD_PUNCT: Regex = Regex::new(r"\w+|[^\w\s]+").unwrap();
}

/// Configuration for RAKE
#[derive(Debug, Clone)]
pub struct RakeConfig {
    /// Minimum words per phrase
    pub min_length: usize,
    /// Maximum words per phrase
    pub max_length: usize,
    /// Keep every occurrence of a phrase in the candidate list (and output)
    pub include_repeated_phrases: bool,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 100_000,
            include_repeated_phrases: true,
        }
    }
}

impl RakeConfig {
    /// Set the phrase length bounds
    pub fn with_length(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Keep or drop repeated phrases
    pub fn with_repeated_phrases(mut self, include: bool) -> Self {
        self.include_repeated_phrases = include;
        self
    }
}

fn is_punctuation(token: &str) -> bool {
    !token.chars().any(|c| c.is_alphanumeric() || c == '_')
}

/// Split each sentence into candidate phrases (lower-case word lists).
fn candidate_phrases<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: &StopwordSet,
    config: &RakeConfig,
) -> Vec<Vec<String>> {
    let mut phrases = Vec::new();

    for sentence in analyzer.sentences(text) {
        let mut current: Vec<String> = Vec::new();
        for m in RE_WORD_PUNCT.find_iter(sentence) {
            let token = m.as_str().to_lowercase();
            if is_punctuation(&token) || stopwords.contains(&token) {
                if !current.is_empty() {
                    phrases.push(std::mem::take(&mut current));
                }
            } else {
                current.push(token);
            }
        }
        if !current.is_empty() {
            phrases.push(current);
        }
    }

    phrases.retain(|p| p.len() >= config.min_length && p.len() <= config.max_length);

    if !config.include_repeated_phrases {
        let mut seen = FxHashSet::default();
        phrases.retain(|p| seen.insert(p.join(" ")));
    }

    phrases
}

/// Rank the phrases of `text`, highest score first.
///
/// Ties are ordered by phrase text, descending.
pub fn rank_phrases<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: &StopwordSet,
    config: &RakeConfig,
) -> Vec<RankedPhrase> {
    let phrases = candidate_phrases(analyzer, text, stopwords, config);

    // word -> (frequency, degree)
    let mut stats: IndexMap<&str, (usize, usize)> = IndexMap::new();
    for phrase in &phrases {
        for word in phrase {
            let entry = stats.entry(word.as_str()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += phrase.len();
        }
    }

    let mut ranked: Vec<RankedPhrase> = phrases
        .iter()
        .map(|phrase| {
            let score = phrase
                .iter()
                .map(|word| {
                    let (freq, degree) = stats[word.as_str()];
                    degree as f64 / freq as f64
                })
                .sum();
            RankedPhrase {
                phrase: phrase.join(" "),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| safe_float_cmp(b.score, a.score).then_with(|| b.phrase.cmp(&a.phrase)));

    log::debug!("RAKE ranked {} phrases over {} words", ranked.len(), stats.len());
    ranked
}
