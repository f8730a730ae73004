use async_trait::async_trait;
use domain::classification::{ClassificationResult, Sentiment};
use domain::classifier::Classifier;
use domain::error::FeedbackError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
struct PredictRequest<'a> {
    review: &'a str,
}

/// Wire shape of the endpoint's response. Every field may be missing; a
/// sparse payload defaults field by field instead of failing the whole
/// submission.
#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}

impl PredictResponse {
    fn into_result(self) -> ClassificationResult {
        ClassificationResult {
            tags: self.tags,
            sentiment: self.sentiment.as_deref().and_then(Sentiment::from_label),
            score: self.score,
        }
    }
}

/// Reqwest-backed implementation of the `Classifier` port.
#[derive(Clone)]
pub struct ClassifierClient {
    client: Arc<Client>,
    base_url: String,
}

impl ClassifierClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url,
        }
    }
}

#[async_trait]
impl Classifier for ClassifierClient {
    async fn classify(&self, review: &str) -> Result<ClassificationResult, FeedbackError> {
        let url = format!("{}/predict", self.base_url);
        debug!(%url, "submitting feedback for classification");

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { review })
            .send()
            .await
            .map_err(|e| FeedbackError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedbackError::RequestFailed(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let payload: PredictResponse = response
            .json()
            .await
            .map_err(|e| FeedbackError::RequestFailed(e.to_string()))?;

        debug!(tags = payload.tags.len(), "classification received");
        Ok(payload.into_result())
    }
}
