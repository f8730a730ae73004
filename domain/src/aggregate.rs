use crate::classification::{ClassificationResult, Sentiment};
use std::collections::HashMap;

/// Cumulative tag counts over the whole history.
///
/// Tags are compared by exact string equality; no normalization or
/// case-folding. Recomputed from scratch per render, which keeps the
/// mapping trivially consistent with the history.
pub fn tag_frequencies(history: &[ClassificationResult]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for entry in history {
        for tag in &entry.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Counts over the fixed sentiment set. Entries whose sentiment is absent
/// or unrecognized contribute to none of the three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentDistribution {
    /// Fixed-order pairs for the proportional chart surface.
    pub fn as_pairs(&self) -> [(&'static str, u64); 3] {
        [
            ("positive", self.positive),
            ("neutral", self.neutral),
            ("negative", self.negative),
        ]
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

pub fn sentiment_distribution(history: &[ClassificationResult]) -> SentimentDistribution {
    let mut dist = SentimentDistribution::default();
    for entry in history {
        match entry.sentiment {
            Some(Sentiment::Positive) => dist.positive += 1,
            Some(Sentiment::Neutral) => dist.neutral += 1,
            Some(Sentiment::Negative) => dist.negative += 1,
            None => {}
        }
    }
    dist
}

/// Shapes the frequency mapping into chart pairs: highest count first,
/// ties alphabetical, so repeated renders are deterministic.
pub fn tag_chart_pairs(counts: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = counts
        .iter()
        .map(|(tag, count)| (tag.clone(), *count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}
