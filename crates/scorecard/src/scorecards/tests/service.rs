use std::sync::Arc;

use super::common::*;
use crate::scorecards::domain::{BusinessId, ScorecardDraft, ScorecardId};
use crate::scorecards::repository::{RepositoryError, ScorecardRepository};
use crate::scorecards::service::{ScorecardService, ScorecardServiceError, SubmissionError};
use crate::scorecards::{RagStatus, TrendDirection};

#[test]
fn submit_persists_a_scored_snapshot() {
    let (service, repository, _alerts) = build_service();

    let record = service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("submission stores");

    assert!(record.scorecard_id.0.starts_with("sc-"));
    assert_eq!(record.summary.total_score, 100.0);
    assert_eq!(record.summary.rag_status, RagStatus::Green);
    assert!(record.trend.is_none(), "first card has no trend");

    let stored = repository
        .fetch(&record.scorecard_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.summary.total_score, 100.0);
}

#[test]
fn submit_computes_trend_against_the_previous_period() {
    let (service, _repository, _alerts) = build_service();

    service
        .submit(amber_submission("acme", period(2026, 6)))
        .expect("first submission stores");
    let second = service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("second submission stores");

    let trend = second.trend.expect("trend present after two periods");
    assert_eq!(trend.direction, TrendDirection::Up);
    assert_eq!(trend.change, 35.0);
    assert_eq!(trend.previous, 65.0);
}

#[test]
fn submit_trend_ignores_other_businesses() {
    let (service, _repository, _alerts) = build_service();

    service
        .submit(strong_submission("other", period(2026, 6)))
        .expect("other business stores");
    let record = service
        .submit(amber_submission("acme", period(2026, 7)))
        .expect("submission stores");

    assert!(record.trend.is_none());
}

#[test]
fn red_submission_raises_a_review_alert() {
    let (service, _repository, alerts) = build_service();

    let record = service
        .submit(neutral_submission("fading", period(2026, 7)))
        .expect("submission stores");

    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "scorecard_red_review");
    assert_eq!(events[0].scorecard_id, record.scorecard_id);
    assert_eq!(events[0].business_id, BusinessId("fading".to_string()));
    assert_eq!(
        events[0].details.get("total_score").map(String::as_str),
        Some("30")
    );
}

#[test]
fn healthy_submission_raises_no_alert() {
    let (service, _repository, alerts) = build_service();

    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("submission stores");

    assert!(alerts.events().is_empty());
}

#[test]
fn submit_rejects_an_empty_business_id() {
    let (service, _repository, _alerts) = build_service();
    let mut submission = strong_submission("", period(2026, 7));
    submission.business_id = BusinessId("   ".to_string());

    let error = service.submit(submission).expect_err("envelope rejected");
    assert!(matches!(
        error,
        ScorecardServiceError::Submission(SubmissionError::MissingBusiness)
    ));
}

#[test]
fn duplicate_period_submission_conflicts() {
    let (service, _repository, _alerts) = build_service();

    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("first submission stores");
    let error = service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect_err("duplicate rejected");

    assert!(matches!(
        error,
        ScorecardServiceError::Repository(RepositoryError::Conflict)
    ));
}

#[test]
fn preview_scores_without_persisting() {
    let (service, repository, alerts) = build_service();
    let submission = strong_submission("acme", period(2026, 7));
    let draft = ScorecardDraft {
        business_id: Some(submission.business_id.clone()),
        period: Some(submission.period),
        financial: submission.financial,
        productivity: submission.productivity,
        qualitative: submission.qualitative,
    };

    let preview = service.preview(&draft);

    assert_eq!(preview.summary.total_score, 100.0);
    assert!(preview.trend.is_none());
    assert!(repository
        .all()
        .expect("repository reachable")
        .is_empty());
    assert!(alerts.events().is_empty(), "previews never alert");
}

#[test]
fn preview_includes_trend_when_history_exists() {
    let (service, _repository, _alerts) = build_service();
    service
        .submit(neutral_submission("acme", period(2026, 6)))
        .expect("history stored");

    let draft = ScorecardDraft {
        business_id: Some(BusinessId("acme".to_string())),
        period: Some(period(2026, 7)),
        ..ScorecardDraft::default()
    };
    let preview = service.preview(&draft);

    // An untouched draft previews the neutral 30, identical to the stored
    // history, so the trend reads flat.
    let trend = preview.trend.expect("trend present");
    assert_eq!(trend.direction, TrendDirection::Same);
    assert_eq!(trend.change, 0.0);
}

#[test]
fn preview_survives_an_unavailable_repository() {
    let service = ScorecardService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryAlertsForUnavailable),
    );

    let draft = ScorecardDraft {
        business_id: Some(BusinessId("acme".to_string())),
        period: Some(period(2026, 7)),
        ..ScorecardDraft::default()
    };
    let preview = service.preview(&draft);

    assert_eq!(preview.summary.total_score, 30.0);
    assert!(preview.trend.is_none(), "trend degrades to none");
}

struct MemoryAlertsForUnavailable;

impl crate::scorecards::repository::ReviewAlertPublisher for MemoryAlertsForUnavailable {
    fn publish(
        &self,
        _alert: crate::scorecards::repository::ReviewAlert,
    ) -> Result<(), crate::scorecards::repository::AlertError> {
        Ok(())
    }
}

#[test]
fn get_surfaces_not_found() {
    let (service, _repository, _alerts) = build_service();

    let error = service
        .get(&ScorecardId("sc-999999".to_string()))
        .expect_err("missing record");
    assert!(matches!(
        error,
        ScorecardServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn history_returns_newest_first() {
    let (service, _repository, _alerts) = build_service();
    service
        .submit(neutral_submission("acme", period(2026, 5)))
        .expect("stores");
    service
        .submit(amber_submission("acme", period(2026, 6)))
        .expect("stores");
    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("stores");

    let history = service
        .history(&BusinessId("acme".to_string()))
        .expect("history loads");

    let periods: Vec<_> = history
        .iter()
        .map(|record| record.submission.period)
        .collect();
    assert_eq!(
        periods,
        vec![period(2026, 7), period(2026, 6), period(2026, 5)]
    );
}

#[test]
fn portfolio_aggregates_latest_card_per_business() {
    let (service, _repository, _alerts) = build_service();
    // "acme" improves from red to green; only the green card counts.
    service
        .submit(neutral_submission("acme", period(2026, 6)))
        .expect("stores");
    service
        .submit(strong_submission("acme", period(2026, 7)))
        .expect("stores");
    service
        .submit(amber_submission("steady", period(2026, 7)))
        .expect("stores");
    service
        .submit(neutral_submission("fading", period(2026, 7)))
        .expect("stores");

    let summary = service.portfolio().expect("portfolio builds");

    assert_eq!(summary.businesses, 3);
    assert_eq!(summary.scorecards, 4);
    assert_eq!(summary.rag_distribution.green, 1);
    assert_eq!(summary.rag_distribution.amber, 1);
    assert_eq!(summary.rag_distribution.red, 1);
    let average = summary.average_score.expect("average present");
    assert!((average - (100.0 + 65.0 + 30.0) / 3.0).abs() < 1e-9);
    assert_eq!(summary.at_risk.len(), 1);
    assert_eq!(summary.at_risk[0].business_id.0, "fading");
}
