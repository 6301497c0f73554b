//! Keyword frequency extraction
//!
//! This module counts content-word occurrences across a product's reviews
//! and reports the most frequent words.

pub mod counter;

use serde::Serialize;

/// A keyword with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

impl KeywordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
