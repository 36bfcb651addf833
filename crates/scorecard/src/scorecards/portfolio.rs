//! Cross-business aggregation over per-record engine outputs.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::domain::{BusinessId, ReportingPeriod};
use super::repository::ScorecardRecord;
use super::scoring::status::RagStatus;

/// Count of businesses currently at each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RagDistribution {
    pub green: usize,
    pub amber: usize,
    pub red: usize,
}

/// A business whose latest card came back red.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRiskEntry {
    pub business_id: BusinessId,
    pub business_name: String,
    pub period: ReportingPeriod,
    pub total_score: f64,
}

/// Portfolio-level rollup of the latest scorecard per business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub businesses: usize,
    pub scorecards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    pub rag_distribution: RagDistribution,
    /// Red businesses ordered worst first.
    pub at_risk: Vec<AtRiskEntry>,
}

/// Aggregate all stored records into a portfolio summary.
///
/// Only the most recent period per business counts towards the average and
/// the distribution; older cards contribute to the raw scorecard tally.
pub fn summarize(records: &[ScorecardRecord]) -> PortfolioSummary {
    let mut latest: HashMap<&BusinessId, &ScorecardRecord> = HashMap::new();
    for record in records {
        latest
            .entry(&record.submission.business_id)
            .and_modify(|current| {
                if record.submission.period > current.submission.period {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    let mut distribution = RagDistribution::default();
    let mut at_risk = Vec::new();
    let mut score_sum = 0.0;

    for record in latest.values() {
        score_sum += record.summary.total_score;
        match record.summary.rag_status {
            RagStatus::Green => distribution.green += 1,
            RagStatus::Amber => distribution.amber += 1,
            RagStatus::Red => {
                distribution.red += 1;
                at_risk.push(AtRiskEntry {
                    business_id: record.submission.business_id.clone(),
                    business_name: record.submission.business_name.clone(),
                    period: record.submission.period,
                    total_score: record.summary.total_score,
                });
            }
        }
    }

    at_risk.sort_by(|a, b| {
        a.total_score
            .partial_cmp(&b.total_score)
            .unwrap_or(Ordering::Equal)
    });

    let businesses = latest.len();
    let average_score = if businesses > 0 {
        Some(score_sum / businesses as f64)
    } else {
        None
    };

    PortfolioSummary {
        businesses,
        scorecards: records.len(),
        average_score,
        rag_distribution: distribution,
        at_risk,
    }
}
