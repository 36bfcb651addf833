//! Qualitative self-assessment vocabularies and their fixed point tables.
//!
//! Each dimension is a closed enum with a total `points` mapping, so every
//! recognized choice scores at compile-checked coverage. Raw strings enter
//! through [`QualitativeChoice::from_key`]; anything unrecognized simply
//! yields no choice and therefore no points.

use serde::{Deserialize, Serialize};

/// Common surface shared by the six scoring vocabularies.
pub trait QualitativeChoice: Copy {
    /// Maximum points attainable in this dimension.
    const MAX_POINTS: f64;

    fn points(self) -> f64;

    /// Parse the canonical, case-sensitive wire key. Unknown keys map to
    /// `None` so callers fall back to a zero score instead of failing.
    fn from_key(key: &str) -> Option<Self>
    where
        Self: Sized;

    fn as_key(self) -> &'static str;
}

/// Points a choice is worth, with absence scoring zero.
pub fn points_or_zero<C: QualitativeChoice>(choice: Option<C>) -> f64 {
    choice.map(|choice| choice.points()).unwrap_or(0.0)
}

/// Leadership alignment across the owner and management team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipChoice {
    Aligned,
    #[serde(alias = "minor_issues")]
    Minor,
    Misaligned,
    Toxic,
}

impl QualitativeChoice for LeadershipChoice {
    const MAX_POINTS: f64 = 10.0;

    fn points(self) -> f64 {
        match self {
            Self::Aligned => 10.0,
            Self::Minor => 7.0,
            Self::Misaligned => 3.0,
            Self::Toxic => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "aligned" => Some(Self::Aligned),
            // "minor_issues" is the spelling older records carry.
            "minor" | "minor_issues" => Some(Self::Minor),
            "misaligned" => Some(Self::Misaligned),
            "toxic" => Some(Self::Toxic),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::Minor => "minor",
            Self::Misaligned => "misaligned",
            Self::Toxic => "toxic",
        }
    }
}

/// Demand outlook for the business's market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemandChoice {
    Strong,
    Flat,
    Softening,
    Decline,
}

impl QualitativeChoice for MarketDemandChoice {
    const MAX_POINTS: f64 = 7.5;

    fn points(self) -> f64 {
        match self {
            Self::Strong => 7.5,
            Self::Flat => 5.0,
            Self::Softening => 2.5,
            Self::Decline => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "strong" => Some(Self::Strong),
            "flat" => Some(Self::Flat),
            "softening" => Some(Self::Softening),
            "decline" => Some(Self::Decline),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Flat => "flat",
            Self::Softening => "softening",
            Self::Decline => "decline",
        }
    }
}

/// Marketing effectiveness as self-assessed by the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketingChoice {
    Clear,
    Activity,
    Poor,
    None,
}

impl QualitativeChoice for MarketingChoice {
    const MAX_POINTS: f64 = 7.5;

    fn points(self) -> f64 {
        match self {
            Self::Clear => 7.5,
            Self::Activity => 5.0,
            Self::Poor => 2.5,
            Self::None => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "clear" => Some(Self::Clear),
            "activity" => Some(Self::Activity),
            "poor" => Some(Self::Poor),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Activity => "activity",
            Self::Poor => "poor",
            Self::None => "none",
        }
    }
}

/// Competitive strength of the product or service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStrengthChoice {
    Differentiated,
    Adequate,
    Weak,
    Broken,
}

impl QualitativeChoice for ProductStrengthChoice {
    const MAX_POINTS: f64 = 10.0;

    fn points(self) -> f64 {
        match self {
            Self::Differentiated => 10.0,
            Self::Adequate => 6.0,
            Self::Weak => 3.0,
            Self::Broken => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "differentiated" => Some(Self::Differentiated),
            "adequate" => Some(Self::Adequate),
            "weak" => Some(Self::Weak),
            "broken" => Some(Self::Broken),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Differentiated => "differentiated",
            Self::Adequate => "adequate",
            Self::Weak => "weak",
            Self::Broken => "broken",
        }
    }
}

/// Reliability of the supplier base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStrengthChoice {
    Strong,
    Acceptable,
    Weak,
    Damaging,
}

impl QualitativeChoice for SupplierStrengthChoice {
    const MAX_POINTS: f64 = 5.0;

    fn points(self) -> f64 {
        match self {
            Self::Strong => 5.0,
            Self::Acceptable => 3.0,
            Self::Weak => 1.0,
            Self::Damaging => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "strong" => Some(Self::Strong),
            "acceptable" => Some(Self::Acceptable),
            "weak" => Some(Self::Weak),
            "damaging" => Some(Self::Damaging),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Acceptable => "acceptable",
            Self::Weak => "weak",
            Self::Damaging => "damaging",
        }
    }
}

/// Sales performance against the business's own targets.
///
/// The canonical keys for this dimension are camelCase (`onTarget`), which
/// the wire format and the lookup below both preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SalesExecutionChoice {
    Beating,
    OnTarget,
    Underperforming,
    None,
}

impl QualitativeChoice for SalesExecutionChoice {
    const MAX_POINTS: f64 = 10.0;

    fn points(self) -> f64 {
        match self {
            Self::Beating => 10.0,
            Self::OnTarget => 6.0,
            Self::Underperforming => 3.0,
            Self::None => 0.0,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "beating" => Some(Self::Beating),
            "onTarget" => Some(Self::OnTarget),
            "underperforming" => Some(Self::Underperforming),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    fn as_key(self) -> &'static str {
        match self {
            Self::Beating => "beating",
            Self::OnTarget => "onTarget",
            Self::Underperforming => "underperforming",
            Self::None => "none",
        }
    }
}
