//! Display-only vocabulary for qualitative assessments.
//!
//! Dashboards and written summaries use a different set of spellings from
//! the canonical scoring keys (for example `minor_issues`, `catching_up`,
//! `reliable`). The two vocabularies are kept as distinct types with an
//! explicit translation so the score-bearing keys never pick up display
//! spellings by accident, and vice versa.

use serde::Serialize;

use super::domain::QualitativeAssessment;
use super::scoring::qualitative::{
    LeadershipChoice, MarketDemandChoice, MarketingChoice, ProductStrengthChoice,
    SalesExecutionChoice, SupplierStrengthChoice,
};
use super::scoring::ScoreFactor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipLabel {
    Aligned,
    MinorIssues,
    Misaligned,
    Toxic,
}

impl LeadershipLabel {
    pub const fn for_choice(choice: LeadershipChoice) -> Self {
        match choice {
            LeadershipChoice::Aligned => Self::Aligned,
            LeadershipChoice::Minor => Self::MinorIssues,
            LeadershipChoice::Misaligned => Self::Misaligned,
            LeadershipChoice::Toxic => Self::Toxic,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Aligned => "Leadership aligned",
            Self::MinorIssues => "Minor issues",
            Self::Misaligned => "Misaligned",
            Self::Toxic => "Toxic culture",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemandLabel {
    Strong,
    Flat,
    Softening,
    Decline,
}

impl MarketDemandLabel {
    pub const fn for_choice(choice: MarketDemandChoice) -> Self {
        match choice {
            MarketDemandChoice::Strong => Self::Strong,
            MarketDemandChoice::Flat => Self::Flat,
            MarketDemandChoice::Softening => Self::Softening,
            MarketDemandChoice::Decline => Self::Decline,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong demand",
            Self::Flat => "Flat demand",
            Self::Softening => "Softening demand",
            Self::Decline => "Demand in decline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketingLabel {
    ClearPlan,
    ActivityOnly,
    Poor,
    NoMarketing,
}

impl MarketingLabel {
    pub const fn for_choice(choice: MarketingChoice) -> Self {
        match choice {
            MarketingChoice::Clear => Self::ClearPlan,
            MarketingChoice::Activity => Self::ActivityOnly,
            MarketingChoice::Poor => Self::Poor,
            MarketingChoice::None => Self::NoMarketing,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ClearPlan => "Clear plan, working",
            Self::ActivityOnly => "Activity without a plan",
            Self::Poor => "Poor fit",
            Self::NoMarketing => "No marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStrengthLabel {
    Differentiated,
    Adequate,
    Weak,
    Broken,
}

impl ProductStrengthLabel {
    pub const fn for_choice(choice: ProductStrengthChoice) -> Self {
        match choice {
            ProductStrengthChoice::Differentiated => Self::Differentiated,
            ProductStrengthChoice::Adequate => Self::Adequate,
            ProductStrengthChoice::Weak => Self::Weak,
            ProductStrengthChoice::Broken => Self::Broken,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Differentiated => "Clearly differentiated",
            Self::Adequate => "Adequate",
            Self::Weak => "Weak offering",
            Self::Broken => "Broken offering",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStrengthLabel {
    Strong,
    Reliable,
    Patchy,
    Damaging,
}

impl SupplierStrengthLabel {
    pub const fn for_choice(choice: SupplierStrengthChoice) -> Self {
        match choice {
            SupplierStrengthChoice::Strong => Self::Strong,
            SupplierStrengthChoice::Acceptable => Self::Reliable,
            SupplierStrengthChoice::Weak => Self::Patchy,
            SupplierStrengthChoice::Damaging => Self::Damaging,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong supplier base",
            Self::Reliable => "Reliable",
            Self::Patchy => "Patchy supply",
            Self::Damaging => "Damaging the business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesExecutionLabel {
    BeatingTarget,
    OnTarget,
    CatchingUp,
    NoPipeline,
}

impl SalesExecutionLabel {
    pub const fn for_choice(choice: SalesExecutionChoice) -> Self {
        match choice {
            SalesExecutionChoice::Beating => Self::BeatingTarget,
            SalesExecutionChoice::OnTarget => Self::OnTarget,
            SalesExecutionChoice::Underperforming => Self::CatchingUp,
            SalesExecutionChoice::None => Self::NoPipeline,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BeatingTarget => "Beating target",
            Self::OnTarget => "On target",
            Self::CatchingUp => "Catching up",
            Self::NoPipeline => "No pipeline",
        }
    }
}

/// One rendered line of qualitative narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeLine {
    pub dimension: ScoreFactor,
    pub dimension_label: &'static str,
    pub assessment: &'static str,
}

/// Narrative lines for every answered dimension, in rubric order.
pub fn narrative_lines(assessment: &QualitativeAssessment) -> Vec<NarrativeLine> {
    let mut lines = Vec::with_capacity(6);
    let mut push = |dimension: ScoreFactor, text: &'static str| {
        lines.push(NarrativeLine {
            dimension,
            dimension_label: dimension.label(),
            assessment: text,
        });
    };

    if let Some(choice) = assessment.leadership {
        push(
            ScoreFactor::Leadership,
            LeadershipLabel::for_choice(choice).label(),
        );
    }
    if let Some(choice) = assessment.market_demand {
        push(
            ScoreFactor::MarketDemand,
            MarketDemandLabel::for_choice(choice).label(),
        );
    }
    if let Some(choice) = assessment.marketing {
        push(
            ScoreFactor::Marketing,
            MarketingLabel::for_choice(choice).label(),
        );
    }
    if let Some(choice) = assessment.product_strength {
        push(
            ScoreFactor::ProductStrength,
            ProductStrengthLabel::for_choice(choice).label(),
        );
    }
    if let Some(choice) = assessment.supplier_strength {
        push(
            ScoreFactor::SupplierStrength,
            SupplierStrengthLabel::for_choice(choice).label(),
        );
    }
    if let Some(choice) = assessment.sales_execution {
        push(
            ScoreFactor::SalesExecution,
            SalesExecutionLabel::for_choice(choice).label(),
        );
    }

    lines
}
