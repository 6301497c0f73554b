//! Core data model.
//!
//! Review and rating rows mirror the columns of the precomputed tables
//! they are loaded from, so a serde-based loader can deserialize them
//! directly. Rows are immutable once loaded; every analysis call receives
//! them as borrowed slices and keeps its own state request-scoped.

use serde::{Deserialize, Serialize};

/// Precomputed sentiment label attached to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Returns the label name used in the source tables and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One product review row.
///
/// Field names map to the upstream table columns; the text is the
/// English rendition of the review produced during preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub asin: String,

    #[serde(rename = "reviewerName")]
    pub reviewer_name: String,

    #[serde(rename = "reviewText_english")]
    pub text: String,

    /// Star rating given by the reviewer (1.0 to 5.0).
    #[serde(rename = "overall")]
    pub rating: f64,

    #[serde(rename = "sentiment_label")]
    pub sentiment: SentimentLabel,

    #[serde(rename = "detected_language")]
    pub language: String,
}

impl Review {
    pub fn new(
        asin: impl Into<String>,
        reviewer_name: impl Into<String>,
        text: impl Into<String>,
        rating: f64,
        sentiment: SentimentLabel,
        language: impl Into<String>,
    ) -> Self {
        Self {
            asin: asin.into(),
            reviewer_name: reviewer_name.into(),
            text: text.into(),
            rating,
            sentiment,
            language: language.into(),
        }
    }
}

/// One precomputed per-product rating row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub asin: String,

    /// Mean star rating across the product's reviews.
    pub avg_rating: f64,

    /// Star rating blended with the sentiment score.
    pub combined_rating: f64,

    /// Mean sentiment polarity in [-1.0, 1.0].
    pub avg_sentiment: f64,

    pub review_count: u64,
}

/// Request-scoped analysis settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of keywords to report.
    pub top_n_keywords: usize,
    /// Minimum keyword length in characters.
    pub min_token_len: usize,
    /// Number of leading reviews kept as display samples.
    pub sample_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n_keywords: 5,
            min_token_len: 3,
            sample_size: 3,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of keywords to report (at least 1).
    pub fn with_top_n_keywords(mut self, top_n: usize) -> Self {
        self.top_n_keywords = top_n.max(1);
        self
    }

    /// Set the minimum keyword length.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Set the number of sample reviews to keep.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}
