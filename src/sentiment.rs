//! Sentiment distribution over precomputed labels
//!
//! Labels are assigned upstream during preprocessing; this module only
//! tallies them into counts and percentage shares for display.

use serde::Serialize;

use crate::types::{Review, SentimentLabel};

/// Label counts for one set of reviews
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    /// Tally a stream of labels.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        let mut dist = Self::default();
        for label in labels {
            dist.add(label);
        }
        dist
    }

    /// Tally the labels of a review slice.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self::from_labels(reviews.iter().map(|r| r.sentiment))
    }

    /// Record one label.
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Number of labels with the given value.
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Total number of labels tallied.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of reviews carrying `label`, in percent. Zero when the
    /// distribution is empty.
    pub fn percent(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reviews() -> Vec<Review> {
        vec![
            Review::new("B01", "Ana", "Love it.", 5.0, SentimentLabel::Positive, "en"),
            Review::new("B01", "Bo", "Fine.", 3.0, SentimentLabel::Neutral, "en"),
            Review::new("B01", "Cat", "Broke fast.", 1.0, SentimentLabel::Negative, "en"),
            Review::new("B01", "Dee", "Great value.", 5.0, SentimentLabel::Positive, "en"),
        ]
    }

    #[test]
    fn test_tallies_labels() {
        let dist = SentimentDistribution::from_reviews(&make_reviews());
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_percentages() {
        let dist = SentimentDistribution::from_reviews(&make_reviews());
        assert_eq!(dist.percent(SentimentLabel::Positive), 50.0);
        assert_eq!(dist.percent(SentimentLabel::Neutral), 25.0);
        assert_eq!(dist.percent(SentimentLabel::Negative), 25.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let dist = SentimentDistribution::from_reviews(&make_reviews());
        let sum = dist.percent(SentimentLabel::Positive)
            + dist.percent(SentimentLabel::Negative)
            + dist.percent(SentimentLabel::Neutral);
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution_is_all_zero() {
        let dist = SentimentDistribution::default();
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.percent(SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn test_from_labels_iterator() {
        let dist = SentimentDistribution::from_labels([
            SentimentLabel::Negative,
            SentimentLabel::Negative,
        ]);
        assert_eq!(dist.negative, 2);
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn test_serializes_label_counts() {
        let dist = SentimentDistribution::from_reviews(&make_reviews());
        let json = serde_json::to_value(dist).unwrap();
        assert_eq!(json["positive"], 2);
        assert_eq!(json["negative"], 1);
        assert_eq!(json["neutral"], 1);
    }
}
