//! Per-product rating summaries
//!
//! Precomputed rating rows indexed by product identifier. The table is
//! built once per loaded dataset and queried per analysis request.

use rustc_hash::FxHashMap;

use crate::types::RatingSummary;

/// In-memory index over precomputed rating rows, keyed by ASIN
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    rows: Vec<RatingSummary>,
    by_asin: FxHashMap<String, usize>,
}

impl RatingTable {
    /// Build a table from precomputed rows.
    ///
    /// On duplicate ASINs the first row wins, matching a positional read
    /// of the source table.
    pub fn from_rows(rows: Vec<RatingSummary>) -> Self {
        let mut by_asin = FxHashMap::default();
        for (i, row) in rows.iter().enumerate() {
            by_asin.entry(row.asin.clone()).or_insert(i);
        }
        Self { rows, by_asin }
    }

    /// Look up the rating row for a product.
    pub fn get(&self, asin: &str) -> Option<&RatingSummary> {
        self.by_asin.get(asin).map(|&i| &self.rows[i])
    }

    /// All rows, in load order.
    pub fn rows(&self) -> &[RatingSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(asin: &str, review_count: u64) -> RatingSummary {
        RatingSummary {
            asin: asin.to_string(),
            avg_rating: 4.0,
            combined_rating: 4.1,
            avg_sentiment: 0.2,
            review_count,
        }
    }

    #[test]
    fn test_lookup_by_asin() {
        let table = RatingTable::from_rows(vec![row("B01", 3), row("B02", 7)]);
        assert_eq!(table.get("B02").unwrap().review_count, 7);
        assert!(table.get("B99").is_none());
    }

    #[test]
    fn test_duplicate_asin_first_row_wins() {
        let table = RatingTable::from_rows(vec![row("B01", 3), row("B01", 9)]);
        assert_eq!(table.get("B01").unwrap().review_count, 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = RatingTable::default();
        assert!(table.is_empty());
        assert!(table.get("B01").is_none());
    }
}
