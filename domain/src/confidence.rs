/// Confidence band derived from the classifier score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Good,
    Warning,
    Poor,
}

impl Tier {
    /// Strict greater-than thresholds: exactly 70 is `Warning` and exactly
    /// 40 is `Poor`.
    pub fn for_percent(percent: u32) -> Self {
        if percent > 70 {
            Self::Good
        } else if percent > 40 {
            Self::Warning
        } else {
            Self::Poor
        }
    }
}

/// Score-to-percentage mapping used by the confidence bar. Out-of-range
/// scores saturate rather than wrap; the producer is external.
pub fn score_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
