//! Word frequency ranking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::stopwords::is_stop_word;

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Count non-stop-word tokens and return the `limit` most frequent.
///
/// Sorted by count descending. Equal counts keep first-seen order.
pub fn top_words<'a, I>(tokens: I, limit: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        if !is_stop_word(token) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // sort_by is stable, which preserves insertion order on ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(ranked: &[WordFrequency]) -> Vec<(&str, usize)> {
        ranked.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_excludes_stop_words() {
        let ranked = top_words(["the", "the", "the", "cat"], 5);
        assert_eq!(pairs(&ranked), vec![("cat", 1)]);
    }

    #[test]
    fn test_orders_by_count_then_first_seen() {
        let tokens = ["fish", "dog", "bird", "dog", "bird", "dog"];
        let ranked = top_words(tokens, 5);
        assert_eq!(pairs(&ranked), vec![("dog", 3), ("bird", 2), ("fish", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = top_words(["zebra", "apple", "mango"], 5);
        assert_eq!(pairs(&ranked), vec![("zebra", 1), ("apple", 1), ("mango", 1)]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let ranked = top_words(["a1", "b2", "c3", "d4", "e5", "f6", "g7"], 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[4].word, "e5");
    }

    #[test]
    fn test_empty() {
        assert!(top_words(std::iter::empty(), 5).is_empty());
    }
}
