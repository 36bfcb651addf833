//! Monthly business scorecards: submission intake, deterministic scoring,
//! and portfolio aggregation.
//!
//! The scoring engine in [`scoring`] is the heart of the module: pure
//! banded-threshold functions that turn financial variances, productivity
//! ratios, and qualitative self-assessments into a 0-100 composite score
//! and a red/amber/green status. Everything else here is the plumbing a
//! service needs around that engine.

pub mod domain;
pub mod narrative;
pub mod portfolio;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BusinessId, FinancialVariances, PeriodParseError, ProductivityFigures, QualitativeAssessment,
    ReportingPeriod, ScorecardDraft, ScorecardId, ScorecardSubmission, SubmissionSource,
};
pub use portfolio::{AtRiskEntry, PortfolioSummary, RagDistribution};
pub use repository::{
    AlertError, RepositoryError, ReviewAlert, ReviewAlertPublisher, ScorecardRecord,
    ScorecardRepository, ScorecardView,
};
pub use router::scorecard_router;
pub use scoring::status::{calculate_trend, RagStatus, Trend, TrendDirection};
pub use scoring::{ScoreComponent, ScoreFactor, ScoreSummary};
pub use service::{ScorePreview, ScorecardService, ScorecardServiceError, SubmissionError};
