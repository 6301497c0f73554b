//! Request-scoped product analysis
//!
//! Assembles the per-product report: keyword frequencies, sentiment
//! distribution, rating summary, and sample reviews. Every input is
//! passed per call and the analyzer itself holds only configuration, so
//! independent requests can share one analyzer across threads.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::keywords::counter::{KeywordConfig, KeywordFrequencyCounter};
use crate::keywords::KeywordCount;
use crate::nlp::stopwords::StopwordFilter;
use crate::ratings::RatingTable;
use crate::sentiment::SentimentDistribution;
use crate::types::{AnalyzerConfig, RatingSummary, Review};

/// Enter a tracing span for an analysis stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

/// Analysis output for one product
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub asin: String,

    /// Number of reviews matching the product.
    pub review_count: usize,

    /// Top keywords by frequency; empty when no content word survives
    /// filtering.
    pub keywords: Vec<KeywordCount>,

    pub sentiment: SentimentDistribution,

    pub rating: RatingSummary,

    /// Leading reviews kept for display.
    pub sample_reviews: Vec<Review>,
}

/// Builds a [`ProductReport`] for one product at a time.
#[derive(Debug, Clone)]
pub struct ProductAnalyzer {
    config: AnalyzerConfig,
    counter: KeywordFrequencyCounter,
}

impl Default for ProductAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductAnalyzer {
    /// Create an analyzer with default config.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom config.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let counter = KeywordFrequencyCounter::with_config(KeywordConfig {
            top_n: config.top_n_keywords,
            min_token_len: config.min_token_len,
        });
        Self { config, counter }
    }

    /// Replace the stopword filter used for keyword counting.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.counter = self.counter.with_stopwords(stopwords);
        self
    }

    /// Analyze the reviews for `asin` and assemble a [`ProductReport`].
    ///
    /// Stages run in order:
    /// 1. Filter `reviews` down to the requested product.
    /// 2. Look up the precomputed rating row.
    /// 3. Count keywords over the matching review texts.
    /// 4. Tally the sentiment distribution.
    /// 5. Retain the leading reviews as display samples.
    ///
    /// Errors with [`AnalysisError::UnknownProduct`] when no review
    /// matches and [`AnalysisError::MissingRating`] when the rating table
    /// has no row for the product. A keyword set that comes back empty
    /// after filtering is not an error at this level: the report carries
    /// an empty list so callers can render a neutral state instead of
    /// failing the whole view.
    pub fn analyze(
        &self,
        reviews: &[Review],
        ratings: &RatingTable,
        asin: &str,
    ) -> Result<ProductReport> {
        trace_stage!("filter");
        let selected: Vec<&Review> = reviews.iter().filter(|r| r.asin == asin).collect();
        if selected.is_empty() {
            return Err(AnalysisError::UnknownProduct {
                asin: asin.to_string(),
            });
        }

        trace_stage!("rating");
        let rating = ratings
            .get(asin)
            .cloned()
            .ok_or_else(|| AnalysisError::MissingRating {
                asin: asin.to_string(),
            })?;

        trace_stage!("keywords");
        let texts: Vec<&str> = selected.iter().map(|r| r.text.as_str()).collect();
        let keywords = match self.counter.count(&texts) {
            Ok(keywords) => keywords,
            Err(AnalysisError::EmptyInput) => Vec::new(),
            Err(err) => return Err(err),
        };

        trace_stage!("sentiment");
        let sentiment = SentimentDistribution::from_labels(selected.iter().map(|r| r.sentiment));

        let sample_reviews = selected
            .iter()
            .take(self.config.sample_size)
            .map(|&r| r.clone())
            .collect();

        Ok(ProductReport {
            asin: asin.to_string(),
            review_count: selected.len(),
            keywords,
            sentiment,
            rating,
            sample_reviews,
        })
    }
}
