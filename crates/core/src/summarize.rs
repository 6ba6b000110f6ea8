//! Extractive summarization by keyword frequency
//!
//! Sentences are scored by how often their words appear across the whole
//! text. The highest scoring sentences are returned in rank order.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Sentence budget used when the caller does not pick one
pub const DEFAULT_MAX_SENTENCES: usize = 2;

/// Function words that carry no topical signal (English and Hindi)
pub const STOP_WORDS: &[&str] = &[
    "the", "is", "and", "a", "to", "in", "of", "का", "की", "और", "है", "में",
];

/// Tokens shorter than this never enter the frequency table
const MIN_COUNTED_LEN: usize = 3;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("word separator pattern is valid"));

/// Split text into sentences.
///
/// A sentence is a run of non-terminator characters followed by one or more
/// of `.`, `!` or `?`. Text after the last terminator is not a sentence. When
/// no terminator exists at all, the whole input is returned as one sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let found: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();
    if found.is_empty() { vec![text] } else { found }
}

fn tokens(text: &str) -> Vec<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .map(str::to_owned)
        .collect()
}

/// Keyword-frequency summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    stop_words: HashSet<String>,
    min_counted_len: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(STOP_WORDS.iter().copied(), MIN_COUNTED_LEN)
    }
}

impl Summarizer {
    /// Create a summarizer with a custom stop-word list.
    ///
    /// `min_counted_len` is the minimum character length a token needs to be
    /// counted in the frequency table.
    pub fn new<I, S>(stop_words: I, min_counted_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            min_counted_len,
        }
    }

    /// Word frequencies across the entire text, stop words and short tokens excluded
    pub fn frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut freq = HashMap::new();
        for word in tokens(text) {
            if word.chars().count() < self.min_counted_len || self.stop_words.contains(&word) {
                continue;
            }
            *freq.entry(word).or_insert(0) += 1;
        }
        freq
    }

    /// Shorten `text` to at most `max_sentences` sentences.
    ///
    /// Returns `text` untouched when it already fits the budget. A budget of
    /// zero is treated as one.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        let max_sentences = max_sentences.max(1);
        let sentences = sentences(text);
        if sentences.len() <= max_sentences {
            return text.to_string();
        }

        let freq = self.frequencies(text);
        let mut scored: Vec<(usize, &str)> = sentences
            .into_iter()
            .map(|sentence| {
                let score: usize = tokens(sentence)
                    .iter()
                    .filter_map(|word| freq.get(word))
                    .sum();
                (score, sentence.trim())
            })
            .collect();

        // sort_by is stable, so equal scores keep document order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(max_sentences)
            .map(|(_, sentence)| sentence)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Summarize with the default stop words
pub fn summarize(text: &str, max_sentences: usize) -> String {
    Summarizer::default().summarize(text, max_sentences)
}
