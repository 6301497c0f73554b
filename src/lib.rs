//! Precomputed review analytics for one product at a time.
//!
//! Given review rows and per-product rating rows that were loaded
//! elsewhere, this crate answers the questions a review dashboard asks:
//! which content words appear most often in a product's reviews, how its
//! sentiment labels are distributed, what its precomputed rating summary
//! looks like, and what the dataset as a whole contains. Data loading and
//! rendering stay outside: inputs arrive as plain slices and results are
//! plain serializable values.
//!
//! # Quick start
//!
//! ```
//! use review_insights::analysis::ProductAnalyzer;
//! use review_insights::ratings::RatingTable;
//! use review_insights::types::{RatingSummary, Review, SentimentLabel};
//!
//! let reviews = vec![Review::new(
//!     "B0002E1G5C",
//!     "Ana",
//!     "Great pedal, great sound.",
//!     5.0,
//!     SentimentLabel::Positive,
//!     "en",
//! )];
//! let ratings = RatingTable::from_rows(vec![RatingSummary {
//!     asin: "B0002E1G5C".to_string(),
//!     avg_rating: 5.0,
//!     combined_rating: 4.8,
//!     avg_sentiment: 0.9,
//!     review_count: 1,
//! }]);
//!
//! let report = ProductAnalyzer::new()
//!     .analyze(&reviews, &ratings, "B0002E1G5C")
//!     .unwrap();
//! assert_eq!(report.keywords[0].word, "great");
//! assert_eq!(report.keywords[0].count, 2);
//! ```

pub mod analysis;
pub mod error;
pub mod keywords;
pub mod nlp;
pub mod ratings;
pub mod sentiment;
pub mod stats;
pub mod types;

pub use analysis::{ProductAnalyzer, ProductReport};
pub use error::{AnalysisError, Result};
pub use keywords::counter::KeywordFrequencyCounter;
pub use keywords::KeywordCount;
pub use sentiment::SentimentDistribution;
pub use types::{AnalyzerConfig, RatingSummary, Review, SentimentLabel};
