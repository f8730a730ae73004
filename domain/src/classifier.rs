use crate::classification::ClassificationResult;
use crate::error::FeedbackError;
use async_trait::async_trait;

/// Port to the remote classification endpoint.
///
/// Implementations classify one non-empty, pre-trimmed piece of feedback
/// per call and must not touch session state; the caller decides whether a
/// result is appended.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, review: &str) -> Result<ClassificationResult, FeedbackError>;
}
