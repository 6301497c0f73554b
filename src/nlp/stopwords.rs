//! Stopword filtering
//!
//! The default filter uses a fixed, curated list of high-frequency English
//! function words so that keyword output is reproducible across runs and
//! releases. The broader English list from the `stop-words` crate is
//! available for callers that want more aggressive filtering, and custom
//! lists are supported.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words excluded from keyword counting by default.
///
/// The list is fixed rather than sourced from a dictionary crate so that
/// the same input always yields the same keywords. Words shorter than
/// three characters are already removed by the tokenizer's length filter.
pub const REVIEW_STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
    "how", "man", "new", "now", "old", "see", "two", "way", "who", "boy",
    "did", "its", "let", "put", "say", "she", "too", "use",
];

/// A filter for removing stopwords from tokenized text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(REVIEW_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create the default filter with the fixed review stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with the full English list from the `stop-words`
    /// crate.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword.
    ///
    /// Matching is case-insensitive. Lowercase input, as produced by the
    /// tokenizer, takes the allocation-free path.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        if word.chars().any(char::is_uppercase) {
            return self.stopwords.contains(&word.to_lowercase());
        }
        false
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_review_stopwords() {
        let filter = StopwordFilter::new();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("was"));
        assert!(!filter.is_stopword("great"));
        assert!(!filter.is_stopword("pedal"));
        assert!(!filter.is_stopword("sound"));
        assert_eq!(filter.len(), REVIEW_STOPWORDS.len());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let filter = StopwordFilter::new();

        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("AND"));
        assert!(!filter.is_stopword("Pedal"));
    }

    #[test]
    fn test_english_list_is_broader() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("guitar"));
        assert!(filter.len() > REVIEW_STOPWORDS.len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(!filter.is_stopword("a"));
        assert!(filter.is_empty());
    }
}
