//! Dataset overview statistics
//!
//! Whole-dataset aggregates shown before any product is selected: review
//! and product totals, reviews per product, detected languages, and the
//! products with the most reviews.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::ratings::RatingTable;
use crate::types::{RatingSummary, Review};

/// Aggregate statistics over the full review set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub total_reviews: usize,
    pub total_products: usize,
    pub avg_reviews_per_product: f64,
    pub languages_detected: usize,
}

impl DatasetOverview {
    /// Compute overview statistics across `reviews`.
    ///
    /// The aggregation is a commutative set fold, so it runs in parallel
    /// over the review slice.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let (asins, languages) = reviews
            .par_iter()
            .fold(
                || (FxHashSet::default(), FxHashSet::default()),
                |(mut asins, mut languages), review: &Review| {
                    asins.insert(review.asin.as_str());
                    languages.insert(review.language.as_str());
                    (asins, languages)
                },
            )
            .reduce(
                || (FxHashSet::default(), FxHashSet::default()),
                |(mut asins, mut languages), (other_asins, other_languages)| {
                    asins.extend(other_asins);
                    languages.extend(other_languages);
                    (asins, languages)
                },
            );

        let total_reviews = reviews.len();
        let total_products = asins.len();
        let avg_reviews_per_product = if total_products == 0 {
            0.0
        } else {
            total_reviews as f64 / total_products as f64
        };

        Self {
            total_reviews,
            total_products,
            avg_reviews_per_product,
            languages_detected: languages.len(),
        }
    }
}

/// The `n` products with the most reviews, in descending order.
///
/// Ties are broken by ASIN so the ordering is deterministic.
pub fn top_products(ratings: &RatingTable, n: usize) -> Vec<&RatingSummary> {
    let mut rows: Vec<&RatingSummary> = ratings.rows().iter().collect();
    rows.sort_by(|a, b| {
        b.review_count
            .cmp(&a.review_count)
            .then_with(|| a.asin.cmp(&b.asin))
    });
    rows.truncate(n);
    rows
}
