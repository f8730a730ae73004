use domain::aggregate::{self, SentimentDistribution};
use domain::classification::ClassificationResult;
use domain::classifier::Classifier;
use domain::error::FeedbackError;
use domain::history::SessionHistory;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the presentation layer needs to redraw after one submission:
/// the freshly settled result plus both cumulative chart feeds, already
/// shaped as ordered label/value pairs.
#[derive(Debug)]
pub struct AnalysisSnapshot {
    pub latest: ClassificationResult,
    pub tag_chart: Vec<(String, u64)>,
    pub sentiment_chart: [(&'static str, u64); 3],
    pub submissions: usize,
}

/// Orchestrates one feedback submission end to end: input validation, the
/// single-outstanding-request guard, the classifier call, and folding the
/// result into session history.
pub struct AnalysisService {
    classifier: Arc<dyn Classifier>,
    history: SessionHistory,
    in_flight: bool,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            history: SessionHistory::new(),
            in_flight: false,
        }
    }

    /// Validates, classifies and appends. Failed requests never touch the
    /// history; the in-flight flag is cleared on every settle path, so a
    /// failure can never wedge the submit control.
    pub async fn submit(&mut self, raw_input: &str) -> Result<AnalysisSnapshot, FeedbackError> {
        let review = raw_input.trim();
        if review.is_empty() {
            return Err(FeedbackError::EmptyInput);
        }
        if self.in_flight {
            return Err(FeedbackError::RequestInFlight);
        }

        self.in_flight = true;
        let outcome = self.classifier.classify(review).await;
        self.in_flight = false;

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "classification request failed");
                return Err(err);
            }
        };

        debug!(
            tags = result.tags.len(),
            entries = self.history.len() + 1,
            "appending classification to session history"
        );
        self.history.append(result.clone());
        Ok(self.snapshot(result))
    }

    fn snapshot(&self, latest: ClassificationResult) -> AnalysisSnapshot {
        AnalysisSnapshot {
            latest,
            tag_chart: self.tag_chart(),
            sentiment_chart: self.sentiment_distribution().as_pairs(),
            submissions: self.history.len(),
        }
    }

    pub fn tag_frequencies(&self) -> HashMap<String, u64> {
        aggregate::tag_frequencies(self.history.all())
    }

    pub fn tag_chart(&self) -> Vec<(String, u64)> {
        aggregate::tag_chart_pairs(&self.tag_frequencies())
    }

    pub fn sentiment_distribution(&self) -> SentimentDistribution {
        aggregate::sentiment_distribution(self.history.all())
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}
