//! TextRank keyword extraction.
//!
//! Content words (alphabetic, not stopwords) are stemmed into graph nodes.
//! Two nodes are linked when their words appear within `window` positions of
//! each other in the running text. PageRank scores the nodes; the best stems
//! are mapped back to the words that produced them, and adjacent keywords in
//! the text are merged into phrases.

use super::graph::{CooccurrenceGraph, PageRank};
use super::stopwords::StopwordSet;
use super::RankedPhrase;
use crate::text::TextAnalyzer;
use crate::utils::safe_float_cmp;
use rustc_hash::{FxHashMap, FxHashSet};

/// Configuration for TextRank
#[derive(Debug, Clone)]
pub struct TextRankConfig {
    /// Share of graph nodes kept as keywords
    pub ratio: f64,
    /// Fixed number of stems to keep; overrides `ratio`
    pub words: Option<usize>,
    /// Co-occurrence window in words
    pub window: usize,
    /// PageRank parameters
    pub pagerank: PageRank,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            words: None,
            window: 2,
            pagerank: PageRank::default(),
        }
    }
}

impl TextRankConfig {
    /// Keep this share of nodes
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Keep exactly this many stems
    pub fn with_words(mut self, words: usize) -> Self {
        self.words = Some(words);
        self
    }

    /// Set the co-occurrence window
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

/// A lower-cased word of the text and its stem, when it is a content word.
struct Word {
    text: String,
    stem: Option<String>,
}

fn split_words<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: &StopwordSet,
) -> Vec<Word> {
    analyzer
        .sentences(text)
        .into_iter()
        .flat_map(|sentence| analyzer.words(sentence))
        .map(|token| {
            let lower = token.to_lowercase();
            let is_content = lower.chars().all(char::is_alphabetic) && !stopwords.contains(&lower);
            let stem = is_content.then(|| analyzer.stem(&lower));
            Word { text: lower, stem }
        })
        .collect()
}

/// Rank keyword phrases of `text` by average word score, highest first.
pub fn rank_keywords<A: TextAnalyzer + ?Sized>(
    analyzer: &A,
    text: &str,
    stopwords: &StopwordSet,
    config: &TextRankConfig,
) -> Vec<RankedPhrase> {
    let words = split_words(analyzer, text, stopwords);
    let window = config.window.max(2);

    let mut graph = CooccurrenceGraph::new();
    for (i, word) in words.iter().enumerate() {
        let Some(stem) = &word.stem else { continue };
        let a = graph.get_or_create_node(stem);
        for other in words.iter().take((i + window).min(words.len())).skip(i + 1) {
            if let Some(other_stem) = &other.stem {
                let b = graph.get_or_create_node(other_stem);
                graph.link(a, b);
            }
        }
    }

    let scores = config.pagerank.run(&graph);

    // Isolated stems never co-occur with anything and are not ranked
    let mut ranked_stems: Vec<(u32, f64)> = graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| !node.edges.is_empty())
        .map(|(id, _)| (id as u32, scores[id]))
        .collect();
    if ranked_stems.is_empty() {
        return Vec::new();
    }
    ranked_stems.sort_by(|a, b| {
        safe_float_cmp(b.1, a.1)
            .then_with(|| graph.nodes()[a.0 as usize].stem.cmp(&graph.nodes()[b.0 as usize].stem))
    });

    let keep = config
        .words
        .unwrap_or((ranked_stems.len() as f64 * config.ratio) as usize)
        .clamp(1, ranked_stems.len());
    let kept: FxHashMap<u32, f64> = ranked_stems.into_iter().take(keep).collect();

    // word text -> score of its stem
    let mut keyword_scores: FxHashMap<&str, f64> = FxHashMap::default();
    for word in &words {
        if let Some(score) = word
            .stem
            .as_deref()
            .and_then(|s| graph.node_id(s))
            .and_then(|id| kept.get(&id))
        {
            keyword_scores.insert(word.text.as_str(), *score);
        }
    }

    let phrases = combine_adjacent(&words, &keyword_scores);
    log::debug!(
        "TextRank kept {} of {} stems, {} phrases",
        keep,
        graph.num_nodes(),
        phrases.len()
    );
    phrases
}

/// Merge runs of adjacent keywords into phrases; each keyword is used once.
fn combine_adjacent(words: &[Word], keyword_scores: &FxHashMap<&str, f64>) -> Vec<RankedPhrase> {
    let mut remaining: FxHashSet<&str> = keyword_scores.keys().copied().collect();
    let mut phrases = Vec::new();

    let mut i = 0;
    while i < words.len() {
        let first = words[i].text.as_str();
        if !remaining.contains(first) {
            i += 1;
            continue;
        }

        let mut run = vec![first];
        let mut j = i + 1;
        while j < words.len() {
            let next = words[j].text.as_str();
            if remaining.contains(next) && !run.contains(&next) {
                run.push(next);
                j += 1;
            } else {
                break;
            }
        }

        for word in &run {
            remaining.remove(word);
        }
        let score = run.iter().map(|w| keyword_scores[w]).sum::<f64>() / run.len() as f64;
        phrases.push(RankedPhrase {
            phrase: run.join(" "),
            score,
        });
        i = j;
    }

    // Stable: equal averages keep text order
    phrases.sort_by(|a, b| safe_float_cmp(b.score, a.score));
    phrases
}
