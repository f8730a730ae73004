use serde::{Deserialize, Serialize};

/// One classified feedback submission, the unit of session history.
///
/// Immutable once appended: the history store only ever hands out shared
/// references to stored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Ordered tag labels; duplicates within one result are preserved.
    pub tags: Vec<String>,
    /// `None` when the endpoint omitted the field or sent a label outside
    /// the fixed set.
    pub sentiment: Option<Sentiment>,
    /// Confidence value, nominally in [0, 1]. `None` renders as a sentinel.
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Parses a wire label. Anything outside the fixed set maps to `None`
    /// rather than an error, so one odd field never fails a submission.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Glyph shown next to the sentiment label; absent/unrecognized
    /// sentiments render blank upstream.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Positive => "🙂",
            Self::Neutral => "😐",
            Self::Negative => "🙁",
        }
    }
}
