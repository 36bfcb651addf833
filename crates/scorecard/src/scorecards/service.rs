use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{BusinessId, ScorecardDraft, ScorecardId, ScorecardSubmission};
use super::portfolio::{self, PortfolioSummary};
use super::repository::{
    AlertError, RepositoryError, ReviewAlert, ReviewAlertPublisher, ScorecardRecord,
    ScorecardRepository,
};
use super::scoring::status::{calculate_trend, RagStatus, Trend};
use super::scoring::{self, ScoreSummary};

/// Service composing the repository, alert hook, and scoring engine.
pub struct ScorecardService<R, A> {
    repository: Arc<R>,
    alerts: Arc<A>,
}

static SCORECARD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_scorecard_id() -> ScorecardId {
    let id = SCORECARD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScorecardId(format!("sc-{id:06}"))
}

/// Engine output for a live preview, before anything is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePreview {
    pub summary: ScoreSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl<R, A> ScorecardService<R, A>
where
    R: ScorecardRepository + 'static,
    A: ReviewAlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>) -> Self {
        Self { repository, alerts }
    }

    /// Score and persist a submission, returning the stored record.
    ///
    /// The envelope (business identity, period) is validated; the scoring
    /// inputs never are. Missing or malformed figures absorb to neutral
    /// defaults inside the engine, so a sparse card still lands a score.
    pub fn submit(
        &self,
        submission: ScorecardSubmission,
    ) -> Result<ScorecardRecord, ScorecardServiceError> {
        validate_envelope(&submission)?;

        let summary = scoring::score_submission(&submission);
        let previous = self
            .repository
            .latest_for_business(&submission.business_id, &submission.period)?;
        let trend = calculate_trend(
            summary.total_score,
            previous.as_ref().map(ScorecardRecord::total_score),
        );

        let record = ScorecardRecord {
            scorecard_id: next_scorecard_id(),
            submission,
            summary,
            trend,
        };
        let stored = self.repository.insert(record)?;

        info!(
            business = %stored.submission.business_id.0,
            period = %stored.submission.period,
            total = stored.summary.total_score,
            rag = stored.summary.rag_status.label(),
            "scorecard stored"
        );

        if stored.summary.rag_status == RagStatus::Red {
            self.publish_red_alert(&stored)?;
        }

        Ok(stored)
    }

    /// Score a draft without persisting anything. Powers the live preview a
    /// form renders on every change; scoring is total, so this cannot fail.
    pub fn preview(&self, draft: &ScorecardDraft) -> ScorePreview {
        let summary = scoring::score_inputs(&draft.financial, &draft.productivity, &draft.qualitative);

        // Trend is best effort here: a preview should render even when the
        // history lookup is unavailable.
        let previous = match (&draft.business_id, &draft.period) {
            (Some(business), Some(period)) => self
                .repository
                .latest_for_business(business, period)
                .ok()
                .flatten(),
            _ => None,
        };
        let trend = calculate_trend(
            summary.total_score,
            previous.as_ref().map(ScorecardRecord::total_score),
        );

        ScorePreview { summary, trend }
    }

    pub fn get(&self, id: &ScorecardId) -> Result<ScorecardRecord, ScorecardServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Scorecard history for one business, newest first.
    pub fn history(
        &self,
        business: &BusinessId,
    ) -> Result<Vec<ScorecardRecord>, ScorecardServiceError> {
        Ok(self.repository.for_business(business)?)
    }

    /// Cross-business aggregates over the latest card per business.
    pub fn portfolio(&self) -> Result<PortfolioSummary, ScorecardServiceError> {
        let records = self.repository.all()?;
        Ok(portfolio::summarize(&records))
    }

    fn publish_red_alert(&self, record: &ScorecardRecord) -> Result<(), ScorecardServiceError> {
        debug!(
            business = %record.submission.business_id.0,
            "red status, raising review alert"
        );
        let mut details = BTreeMap::new();
        details.insert(
            "total_score".to_string(),
            record.summary.total_score.to_string(),
        );
        details.insert("period".to_string(), record.submission.period.to_string());
        self.alerts.publish(ReviewAlert {
            template: "scorecard_red_review".to_string(),
            scorecard_id: record.scorecard_id.clone(),
            business_id: record.submission.business_id.clone(),
            details,
        })?;
        Ok(())
    }
}

fn validate_envelope(submission: &ScorecardSubmission) -> Result<(), SubmissionError> {
    if submission.business_id.0.trim().is_empty() {
        return Err(SubmissionError::MissingBusiness);
    }
    if !submission.period.is_valid() {
        return Err(SubmissionError::InvalidPeriod(submission.period.month));
    }
    Ok(())
}

/// Faults in the submission envelope, distinct from scoring inputs, which
/// are never rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("business id must not be empty")]
    MissingBusiness,
    #[error("reporting month must fall within 1..=12, got {0}")]
    InvalidPeriod(u32),
}

/// Error raised by the scorecard service.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
