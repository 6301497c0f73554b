//! Deterministic keyword frequency counting
//!
//! Counts content words across a collection of review texts and returns
//! the top-N most frequent ones. The ordering is fully deterministic:
//! counts descend, and words with equal counts keep the order in which
//! they first appeared in the input.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::error::{AnalysisError, Result};
use crate::keywords::KeywordCount;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;

/// Configuration for keyword counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Maximum number of keywords to return
    pub top_n: usize,
    /// Minimum token length in characters
    pub min_token_len: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_token_len: 3,
        }
    }
}

/// Counts keyword frequencies over the reviews of one product.
///
/// The counter is pure and holds no request state, so one instance can
/// serve concurrent analysis requests as long as each call brings its own
/// input collection.
#[derive(Debug, Clone)]
pub struct KeywordFrequencyCounter {
    config: KeywordConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl Default for KeywordFrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordFrequencyCounter {
    /// Create a counter with default config and the default stopword list.
    pub fn new() -> Self {
        Self::with_config(KeywordConfig::default())
    }

    /// Create a counter with custom config.
    pub fn with_config(config: KeywordConfig) -> Self {
        let tokenizer = Tokenizer::new().with_min_len(config.min_token_len);
        Self {
            config,
            tokenizer,
            stopwords: StopwordFilter::default(),
        }
    }

    /// Set the maximum number of keywords to return (at least 1).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n.max(1);
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.config.min_token_len = min_token_len;
        self.tokenizer = Tokenizer::new().with_min_len(min_token_len);
        self
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Count keyword frequencies across `texts` and return the top-N words
    /// by descending count.
    ///
    /// Texts are processed in input order, so ties in count resolve to the
    /// word that appeared first. Errors with [`AnalysisError::EmptyInput`]
    /// when the collection is empty or no token survives stopword and
    /// length filtering; no partial result is produced.
    pub fn count<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<KeywordCount>> {
        // Word -> position in `counts`, so insertion order survives the
        // hash map.
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut counts: Vec<KeywordCount> = Vec::new();

        for text in texts {
            for word in self.tokenizer.tokenize(text.as_ref()) {
                if self.stopwords.is_stopword(&word) {
                    continue;
                }
                match index.entry(word) {
                    Entry::Occupied(slot) => counts[*slot.get()].count += 1,
                    Entry::Vacant(slot) => {
                        let word = slot.key().clone();
                        slot.insert(counts.len());
                        counts.push(KeywordCount::new(word, 1));
                    }
                }
            }
        }

        if counts.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        // Stable sort: equal counts keep first-seen order.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(self.config.top_n);
        Ok(counts)
    }
}
