//! The deterministic scoring engine.
//!
//! Pure functions only: raw variances, ratios, and self-assessment choices
//! go in, points and statuses come out. Nothing here performs I/O, holds
//! state, or returns an error; incomplete or invalid inputs absorb to
//! neutral defaults so a half-filled form still previews a score. The
//! functions are cheap enough to run on every input change.

pub mod aggregate;
pub mod bands;
pub mod qualitative;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::scorecards::domain::{
    FinancialVariances, ProductivityFigures, QualitativeAssessment, ScorecardSubmission,
};
use aggregate::{calculate_total_score, financial_subtotal, SectionScore};
use bands::{productivity_variance, score_inverted, score_productivity, score_standard};
use qualitative::{points_or_zero, QualitativeChoice};
use qualitative::{
    LeadershipChoice, MarketDemandChoice, MarketingChoice, ProductStrengthChoice,
    SalesExecutionChoice, SupplierStrengthChoice,
};
use status::RagStatus;

/// Labels each scored metric so breakdowns stay auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Revenue,
    GrossProfit,
    Overheads,
    NetProfit,
    Productivity,
    Leadership,
    MarketDemand,
    Marketing,
    ProductStrength,
    SupplierStrength,
    SalesExecution,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::GrossProfit => "Gross Profit",
            Self::Overheads => "Overheads",
            Self::NetProfit => "Net Profit",
            Self::Productivity => "Productivity",
            Self::Leadership => "Leadership",
            Self::MarketDemand => "Market Demand",
            Self::Marketing => "Marketing",
            Self::ProductStrength => "Product Strength",
            Self::SupplierStrength => "Supplier Strength",
            Self::SalesExecution => "Sales Execution",
        }
    }
}

/// Discrete contribution to a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub max_points: f64,
}

/// Everything the engine derives from one set of scorecard inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_score: f64,
    pub rag_status: RagStatus,
    /// Financial section with per-metric max tracking, for partial-credit
    /// display alongside the composite total.
    pub financial: SectionScore,
    /// The derived productivity variance that fed the productivity band.
    pub productivity_variance: f64,
    pub components: Vec<ScoreComponent>,
}

/// Score a complete submission.
pub fn score_submission(submission: &ScorecardSubmission) -> ScoreSummary {
    score_inputs(
        &submission.financial,
        &submission.productivity,
        &submission.qualitative,
    )
}

/// Score any combination of inputs, complete or not.
pub fn score_inputs(
    financial: &FinancialVariances,
    productivity: &ProductivityFigures,
    qualitative: &QualitativeAssessment,
) -> ScoreSummary {
    let total_score = calculate_total_score(financial, productivity, qualitative);
    let derived_variance = productivity_variance(
        productivity.benchmark.unwrap_or(0.0),
        productivity.actual.unwrap_or(0.0),
    );

    let component = |factor: ScoreFactor, points: f64, max_points: f64| ScoreComponent {
        factor,
        points,
        max_points,
    };
    let banded = |factor, score: u8| component(factor, f64::from(score), 10.0);

    let components = vec![
        banded(
            ScoreFactor::Revenue,
            score_standard(financial.revenue.unwrap_or(0.0)),
        ),
        banded(
            ScoreFactor::GrossProfit,
            score_standard(financial.gross_profit.unwrap_or(0.0)),
        ),
        banded(
            ScoreFactor::Overheads,
            score_inverted(financial.overheads.unwrap_or(0.0)),
        ),
        banded(
            ScoreFactor::NetProfit,
            score_standard(financial.net_profit.unwrap_or(0.0)),
        ),
        banded(ScoreFactor::Productivity, score_productivity(derived_variance)),
        component(
            ScoreFactor::Leadership,
            points_or_zero(qualitative.leadership),
            LeadershipChoice::MAX_POINTS,
        ),
        component(
            ScoreFactor::MarketDemand,
            points_or_zero(qualitative.market_demand),
            MarketDemandChoice::MAX_POINTS,
        ),
        component(
            ScoreFactor::Marketing,
            points_or_zero(qualitative.marketing),
            MarketingChoice::MAX_POINTS,
        ),
        component(
            ScoreFactor::ProductStrength,
            points_or_zero(qualitative.product_strength),
            ProductStrengthChoice::MAX_POINTS,
        ),
        component(
            ScoreFactor::SupplierStrength,
            points_or_zero(qualitative.supplier_strength),
            SupplierStrengthChoice::MAX_POINTS,
        ),
        component(
            ScoreFactor::SalesExecution,
            points_or_zero(qualitative.sales_execution),
            SalesExecutionChoice::MAX_POINTS,
        ),
    ];

    ScoreSummary {
        total_score,
        rag_status: RagStatus::for_score(total_score),
        financial: financial_subtotal(
            financial.revenue,
            financial.gross_profit,
            financial.overheads,
            financial.net_profit,
        ),
        productivity_variance: derived_variance,
        components,
    }
}
