//! Error types for analysis requests.
//!
//! Every error is reported immediately to the caller; there are no
//! retries and no partial results.

/// Errors an analysis request can produce.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input collection was empty, or no token survived stopword and
    /// length filtering. Callers render a neutral empty state for this.
    #[error("no keywords available")]
    EmptyInput,

    /// No review matches the requested product identifier.
    #[error("no reviews found for product {asin}")]
    UnknownProduct { asin: String },

    /// The rating table has no row for the requested product.
    #[error("rating information not available for product {asin}")]
    MissingRating { asin: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
