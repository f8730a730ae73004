use thiserror::Error;

/// Everything that can stop a submission from producing a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Rejected by the caller before the client is ever invoked.
    #[error("feedback text is empty")]
    EmptyInput,

    /// A previous submission has not settled yet; at most one request may
    /// be outstanding.
    #[error("a classification request is already in flight")]
    RequestInFlight,

    /// Transport failures, non-success statuses and malformed bodies all
    /// collapse here; only the message distinguishes them. Never recorded
    /// in session history.
    #[error("classification request failed: {0}")]
    RequestFailed(String),
}
