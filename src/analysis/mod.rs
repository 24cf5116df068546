//! Text statistics.
//!
//! `analyze` is the whole core: tokenize the lower-cased text, count words
//! and sentences, average the token lengths and rank the most frequent
//! non-stop-words. It is pure and total over any string.

mod frequency;
mod sentences;
mod stopwords;
mod tokenizer;

use serde::{Deserialize, Serialize};

pub use frequency::{top_words, WordFrequency};
pub use sentences::count_sentences;
pub use stopwords::{is_stop_word, STOP_WORDS};
pub use tokenizer::{is_word_char, token_len, tokens, Tokens};

/// Number of entries reported in `top_words`.
pub const TOP_WORDS_LIMIT: usize = 5;

/// Statistics computed for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// All tokens, stop words included.
    pub total_words: usize,
    /// Terminated sentences.
    pub total_sentences: usize,
    /// Mean token length in characters, rounded to 2 decimals. 0 for no words.
    pub avg_word_length: f64,
    /// Up to five most frequent non-stop-words, count descending.
    pub top_words: Vec<WordFrequency>,
}

/// Analyze a text.
pub fn analyze(text: &str) -> AnalysisResult {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = tokens(&lowered).collect();

    let total_words = words.len();
    let total_chars: usize = words.iter().map(|w| token_len(w)).sum();
    let avg_word_length = if total_words == 0 {
        0.0
    } else {
        round2(total_chars as f64 / total_words as f64)
    };

    AnalysisResult {
        total_words,
        total_sentences: count_sentences(text),
        avg_word_length,
        top_words: top_words(words.iter().copied(), TOP_WORDS_LIMIT),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
