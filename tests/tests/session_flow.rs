//! End-to-end tests of the submission pipeline: validation, classifier
//! call, history accumulation, aggregate recomputation, and the rendered
//! chart feeds.

use application::analysis_service::AnalysisService;
use domain::classification::{ClassificationResult, Sentiment};
use domain::classifier::Classifier;
use domain::confidence::{score_percent, Tier};
use domain::error::FeedbackError;
use std::sync::Arc;
use tests::fake::FakeClassifier;

fn result(tags: &[&str], sentiment: Option<Sentiment>, score: Option<f64>) -> ClassificationResult {
    ClassificationResult {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        sentiment,
        score,
    }
}

#[tokio::test]
async fn single_negative_submission() {
    let fake = Arc::new(FakeClassifier::new(vec![Ok(result(
        &["slow", "ui"],
        Some(Sentiment::Negative),
        Some(0.92),
    ))]));
    let mut service = AnalysisService::new(fake);

    let snapshot = service.submit("the app feels slow").await.unwrap();

    assert_eq!(
        snapshot.tag_chart,
        vec![("slow".to_string(), 1), ("ui".to_string(), 1)]
    );
    assert_eq!(
        snapshot.sentiment_chart,
        [("positive", 0), ("neutral", 0), ("negative", 1)]
    );

    let percent = score_percent(snapshot.latest.score.unwrap());
    assert_eq!(percent, 92);
    assert_eq!(Tier::for_percent(percent), Tier::Good);
}

#[tokio::test]
async fn two_positive_submissions_accumulate() {
    let fake = Arc::new(FakeClassifier::new(vec![
        Ok(result(&["ui"], Some(Sentiment::Positive), Some(0.5))),
        Ok(result(&["ui", "fast"], Some(Sentiment::Positive), Some(0.3))),
    ]));
    let mut service = AnalysisService::new(fake);

    service.submit("love the ui").await.unwrap();
    let snapshot = service.submit("ui is fast too").await.unwrap();

    assert_eq!(
        snapshot.tag_chart,
        vec![("ui".to_string(), 2), ("fast".to_string(), 1)]
    );
    assert_eq!(
        snapshot.sentiment_chart,
        [("positive", 2), ("neutral", 0), ("negative", 0)]
    );
}

#[tokio::test]
async fn failed_request_records_nothing_and_allows_a_retry() {
    let fake = Arc::new(FakeClassifier::new(vec![
        Err(FeedbackError::RequestFailed("connection refused".into())),
        Ok(result(&["ui"], Some(Sentiment::Neutral), Some(0.4))),
    ]));
    let mut service = AnalysisService::new(Arc::clone(&fake) as Arc<dyn Classifier>);

    let err = service.submit("does not matter").await.unwrap_err();
    assert!(matches!(err, FeedbackError::RequestFailed(_)));
    assert!(service.history().is_empty());

    // The control is released; the very next submission succeeds.
    let snapshot = service.submit("second attempt").await.unwrap();
    assert_eq!(snapshot.submissions, 1);
    assert_eq!(fake.remaining(), 0);
}

#[tokio::test]
async fn empty_input_is_rejected_without_a_request() {
    let fake = Arc::new(FakeClassifier::new(vec![Ok(result(&[], None, None))]));
    let mut service = AnalysisService::new(Arc::clone(&fake) as Arc<dyn Classifier>);

    assert_eq!(
        service.submit("").await.unwrap_err(),
        FeedbackError::EmptyInput
    );
    assert_eq!(
        service.submit(" \t\n").await.unwrap_err(),
        FeedbackError::EmptyInput
    );
    assert!(service.history().is_empty());
    assert_eq!(fake.remaining(), 1);
}

#[tokio::test]
async fn defaulted_fields_flow_through_to_sentinel_rendering() {
    let fake = Arc::new(FakeClassifier::new(vec![Ok(result(&[], None, None))]));
    let mut service = AnalysisService::new(fake);

    let snapshot = service.submit("meh").await.unwrap();
    assert!(snapshot.tag_chart.is_empty());
    assert_eq!(
        snapshot.sentiment_chart,
        [("positive", 0), ("neutral", 0), ("negative", 0)]
    );

    let panel = presentation::render::result_panel(&snapshot.latest);
    assert!(panel.contains("Tags:       none"));
    assert!(panel.contains("Sentiment:  n/a"));
    assert!(panel.contains("Confidence: n/a"));
}

#[tokio::test]
async fn boundary_score_renders_as_warning_tier() {
    colored::control::set_override(true);
    let fake = Arc::new(FakeClassifier::new(vec![Ok(result(
        &["ok"],
        Some(Sentiment::Neutral),
        Some(0.70),
    ))]));
    let mut service = AnalysisService::new(fake);

    let snapshot = service.submit("it is fine").await.unwrap();
    let percent = score_percent(snapshot.latest.score.unwrap());
    assert_eq!(percent, 70);
    assert_eq!(Tier::for_percent(percent), Tier::Warning);

    // Yellow (warning) escape, not green (good).
    let panel = presentation::render::result_panel(&snapshot.latest);
    assert!(panel.contains("\u{1b}[33m"));
    assert!(!panel.contains("\u{1b}[32m"));
}

#[test]
fn config_falls_back_to_the_local_endpoint() {
    if std::env::var("FEEDLENS_BASE_URL").is_err() {
        let config = infrastructure::config::Config::load();
        assert_eq!(config.base_url, "http://localhost:5000");
    }
}
