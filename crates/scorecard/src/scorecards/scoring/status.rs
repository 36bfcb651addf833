//! Traffic-light classification and month-over-month trend.

use serde::{Deserialize, Serialize};

/// Red/amber/green health status derived from a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
}

impl RagStatus {
    /// Classify a composite score. Total over all inputs; anything that is
    /// not at least amber-grade is red, including pathological values.
    pub fn for_score(total_score: f64) -> Self {
        if total_score >= 75.0 {
            Self::Green
        } else if total_score >= 60.0 {
            Self::Amber
        } else {
            Self::Red
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

/// Which way the score moved against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Same,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Same => "same",
        }
    }
}

/// Signed movement of the composite score between two periods.
///
/// `change` keeps full floating precision; rounding is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub change: f64,
    pub previous: f64,
}

/// Compare the current score against the previous one, if any. A business's
/// first scorecard has nothing to compare against and yields `None`.
pub fn calculate_trend(current: f64, previous: Option<f64>) -> Option<Trend> {
    let previous = previous?;
    let change = current - previous;
    let direction = if change > 0.0 {
        TrendDirection::Up
    } else if change < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Same
    };
    Some(Trend {
        direction,
        change,
        previous,
    })
}
