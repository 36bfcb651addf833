use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{BusinessId, ReportingPeriod, ScorecardId, ScorecardSubmission};
use super::narrative::{narrative_lines, NarrativeLine};
use super::scoring::status::Trend;
use super::scoring::{ScoreComponent, ScoreSummary};

/// Snapshot stored for each scored submission.
///
/// The composite score and status are computed once at submit time and
/// persisted alongside the raw inputs, so historical records keep the score
/// they were given even if the rubric evolves later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardRecord {
    pub scorecard_id: ScorecardId,
    pub submission: ScorecardSubmission,
    pub summary: ScoreSummary,
    pub trend: Option<Trend>,
}

impl ScorecardRecord {
    pub fn total_score(&self) -> f64 {
        self.summary.total_score
    }

    pub fn view(&self) -> ScorecardView {
        ScorecardView {
            scorecard_id: self.scorecard_id.clone(),
            business_id: self.submission.business_id.clone(),
            business_name: self.submission.business_name.clone(),
            period: self.submission.period,
            source: self.submission.source.label(),
            total_score: self.summary.total_score,
            rag_status: self.summary.rag_status.label(),
            trend: self.trend,
            components: self.summary.components.clone(),
            narrative: narrative_lines(&self.submission.qualitative),
            commentary: self.submission.commentary.clone(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
/// The production adapter lives with the rest of the persistence stack.
pub trait ScorecardRepository: Send + Sync {
    fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError>;
    fn fetch(&self, id: &ScorecardId) -> Result<Option<ScorecardRecord>, RepositoryError>;
    /// The most recent record for a business strictly before `period`.
    fn latest_for_business(
        &self,
        business: &BusinessId,
        period: &ReportingPeriod,
    ) -> Result<Option<ScorecardRecord>, RepositoryError>;
    /// Full history for a business, newest first.
    fn for_business(&self, business: &BusinessId) -> Result<Vec<ScorecardRecord>, RepositoryError>;
    fn all(&self) -> Result<Vec<ScorecardRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("a scorecard already exists for this business and period")]
    Conflict,
    #[error("scorecard not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook raised when a scored card needs account-manager follow-up.
pub trait ReviewAlertPublisher: Send + Sync {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError>;
}

/// Alert payload so routes and tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAlert {
    pub template: String,
    pub scorecard_id: ScorecardId,
    pub business_id: BusinessId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a scored card for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardView {
    pub scorecard_id: ScorecardId,
    pub business_id: BusinessId,
    pub business_name: String,
    pub period: ReportingPeriod,
    pub source: &'static str,
    pub total_score: f64,
    pub rag_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    pub components: Vec<ScoreComponent>,
    pub narrative: Vec<NarrativeLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}
