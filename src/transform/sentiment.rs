//! Sentiment classification and histogram.
//!
//! Buckets continuous sentiment scores into three ordinal classes and counts
//! occurrences over the whole feedback set. No category or date grouping
//! happens here; the histogram is flat.
//!
//! The boundary contract is asymmetric and must stay that way: Neutral is
//! closed on both ends, Positive and Negative are open. A score of exactly
//! 0.7 is Neutral (the Positive clause requires strict greater-than), and a
//! score of exactly 0.3 is Neutral (lower inclusive bound). Scores outside
//! [0, 1] are still bucketed by the same inequalities.
//!
//! Unlike the weekday matrix, labels with zero occurrences are omitted from
//! the output, not zero-filled.

use serde::{Deserialize, Serialize};

use crate::models::FeedbackRecord;

/// Ordinal sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// Classify a sentiment score. Clauses are evaluated in priority order:
    ///
    /// - score > 0.7 → Positive
    /// - 0.3 ≤ score ≤ 0.7 → Neutral
    /// - score < 0.3 → Negative
    pub fn classify(score: f64) -> Self {
        if score > 0.7 {
            Sentiment::Positive
        } else if score >= 0.3 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    /// Display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        }
    }
}

/// One bar of the sentiment histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBucket {
    pub label: Sentiment,
    pub count: usize,
}

/// Tally sentiment classes over the whole feedback set.
///
/// Only labels that occur at least once are emitted, in ascending label-name
/// order (Negative, Neutral, Positive).
pub fn sentiment_counts(records: &[FeedbackRecord]) -> Vec<SentimentBucket> {
    let mut negative = 0;
    let mut neutral = 0;
    let mut positive = 0;

    for record in records {
        match Sentiment::classify(record.sentiment_score) {
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Positive => positive += 1,
        }
    }

    [
        (Sentiment::Negative, negative),
        (Sentiment::Neutral, neutral),
        (Sentiment::Positive, positive),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(label, count)| SentimentBucket { label, count })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(score: f64) -> FeedbackRecord {
        FeedbackRecord {
            date: "2024-01-01".parse().unwrap(),
            category: "A".to_string(),
            rating: 3,
            sentiment_score: score,
        }
    }

    #[test]
    fn test_boundary_contract() {
        assert_eq!(Sentiment::classify(0.7), Sentiment::Neutral);
        assert_eq!(Sentiment::classify(0.70001), Sentiment::Positive);
        assert_eq!(Sentiment::classify(0.3), Sentiment::Neutral);
        assert_eq!(Sentiment::classify(0.29999), Sentiment::Negative);
    }

    #[test]
    fn test_out_of_range_scores_still_bucketed() {
        assert_eq!(Sentiment::classify(1.5), Sentiment::Positive);
        assert_eq!(Sentiment::classify(-0.2), Sentiment::Negative);
    }

    #[test]
    fn test_spec_scenario() {
        let records: Vec<_> = [0.1, 0.5, 0.9, 0.7, 0.3].iter().map(|&s| feedback(s)).collect();

        let buckets = sentiment_counts(&records);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0], SentimentBucket { label: Sentiment::Negative, count: 1 });
        assert_eq!(buckets[1], SentimentBucket { label: Sentiment::Neutral, count: 3 });
        assert_eq!(buckets[2], SentimentBucket { label: Sentiment::Positive, count: 1 });
    }

    #[test]
    fn test_absent_labels_omitted() {
        let records: Vec<_> = [0.9, 0.8].iter().map(|&s| feedback(s)).collect();

        let buckets = sentiment_counts(&records);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, Sentiment::Positive);
        assert_eq!(buckets[0].count, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(sentiment_counts(&[]).is_empty());
    }

    #[test]
    fn test_label_serialization() {
        let bucket = SentimentBucket { label: Sentiment::Neutral, count: 2 };
        let json = serde_json::to_string(&bucket).unwrap();
        assert!(json.contains("\"Neutral\""));
    }
}
