//! Subtotal and composite-score aggregation over the band scorers.

use serde::{Deserialize, Serialize};

use super::bands::{productivity_variance, score_inverted, score_productivity, score_standard};
use super::qualitative::points_or_zero;
use crate::scorecards::domain::{FinancialVariances, ProductivityFigures, QualitativeAssessment};

/// Achieved and attainable points for a group of metrics.
///
/// `max_score` counts only the metrics that were actually supplied, so a
/// partially completed section earns partial credit rather than being
/// dragged down by blanks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: f64,
    pub max_score: f64,
}

impl SectionScore {
    fn add(&mut self, points: u8, max_points: f64) {
        self.score += f64::from(points);
        self.max_score += max_points;
    }
}

/// Financial subtotal with per-metric max tracking.
///
/// Revenue, gross profit, and net profit use the standard scorer; overheads
/// use the inverted scorer because underspend is desirable. Absent metrics
/// contribute to neither side of the section.
pub fn financial_subtotal(
    revenue: Option<f64>,
    gross_profit: Option<f64>,
    overheads: Option<f64>,
    net_profit: Option<f64>,
) -> SectionScore {
    let mut section = SectionScore::default();
    for variance in [revenue, gross_profit, net_profit].into_iter().flatten() {
        section.add(score_standard(variance), 10.0);
    }
    if let Some(variance) = overheads {
        section.add(score_inverted(variance), 10.0);
    }
    section
}

fn or_neutral(variance: Option<f64>) -> f64 {
    variance.unwrap_or(0.0)
}

/// Composite 0-100 score across every section.
///
/// Unlike [`financial_subtotal`], this path assumes full participation:
/// absent financial variances fall back to the neutral variance 0 (which
/// band-scores to 6), absent productivity ratios fall back to 0 and score
/// through the zero-benchmark neutral path, and absent qualitative choices
/// contribute nothing. Existing dashboards depend on those exact defaults.
pub fn calculate_total_score(
    financial: &FinancialVariances,
    productivity: &ProductivityFigures,
    qualitative: &QualitativeAssessment,
) -> f64 {
    let financial_points = f64::from(score_standard(or_neutral(financial.revenue)))
        + f64::from(score_standard(or_neutral(financial.gross_profit)))
        + f64::from(score_inverted(or_neutral(financial.overheads)))
        + f64::from(score_standard(or_neutral(financial.net_profit)));

    let productivity_points = f64::from(score_productivity(productivity_variance(
        or_neutral(productivity.benchmark),
        or_neutral(productivity.actual),
    )));

    let qualitative_points = points_or_zero(qualitative.leadership)
        + points_or_zero(qualitative.market_demand)
        + points_or_zero(qualitative.marketing)
        + points_or_zero(qualitative.product_strength)
        + points_or_zero(qualitative.supplier_strength)
        + points_or_zero(qualitative.sales_execution);

    financial_points + productivity_points + qualitative_points
}
