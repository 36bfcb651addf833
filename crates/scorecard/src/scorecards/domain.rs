use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scoring::qualitative::{
    LeadershipChoice, MarketDemandChoice, MarketingChoice, ProductStrengthChoice,
    QualitativeChoice, SalesExecutionChoice, SupplierStrengthChoice,
};

/// Identifier wrapper for client businesses in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub String);

/// Identifier wrapper for submitted scorecards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorecardId(pub String);

/// The calendar month a scorecard covers.
///
/// Periods order chronologically so "the previous scorecard" for a business
/// is well defined. The wire format is `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportingPeriod {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn is_valid(self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// The month immediately before this one.
    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReportingPeriod {
    type Err = PeriodParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let err = || PeriodParseError {
            raw: raw.to_string(),
        };
        let (year, month) = trimmed.split_once('-').ok_or_else(err)?;
        let period = Self {
            year: year.parse().map_err(|_| err())?,
            month: month.parse().map_err(|_| err())?,
        };
        if period.is_valid() {
            Ok(period)
        } else {
            Err(err())
        }
    }
}

impl Serialize for ReportingPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReportingPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug)]
pub struct PeriodParseError {
    pub raw: String,
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a YYYY-MM reporting period", self.raw)
    }
}

impl std::error::Error for PeriodParseError {}

/// Who filed the scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionSource {
    Consultant,
    BusinessSelfReport,
}

impl SubmissionSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consultant => "consultant",
            Self::BusinessSelfReport => "business_self_report",
        }
    }
}

/// Precomputed financial variance percentages for the month.
///
/// `None` means no target/actual pair was available for that metric, which
/// is distinct from a variance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialVariances {
    pub revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub overheads: Option<f64>,
    pub net_profit: Option<f64>,
}

/// Gross-profit-over-wages ratios used for productivity scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductivityFigures {
    pub benchmark: Option<f64>,
    pub actual: Option<f64>,
}

/// The six qualitative self-assessment choices.
///
/// Fields deserialize leniently: an unrecognized choice string becomes
/// `None` and scores zero rather than rejecting the whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitativeAssessment {
    #[serde(deserialize_with = "lenient_choice")]
    pub leadership: Option<LeadershipChoice>,
    #[serde(deserialize_with = "lenient_choice")]
    pub market_demand: Option<MarketDemandChoice>,
    #[serde(deserialize_with = "lenient_choice")]
    pub marketing: Option<MarketingChoice>,
    #[serde(deserialize_with = "lenient_choice")]
    pub product_strength: Option<ProductStrengthChoice>,
    #[serde(deserialize_with = "lenient_choice")]
    pub supplier_strength: Option<SupplierStrengthChoice>,
    #[serde(deserialize_with = "lenient_choice")]
    pub sales_execution: Option<SalesExecutionChoice>,
}

fn lenient_choice<'de, D, C>(deserializer: D) -> Result<Option<C>, D::Error>
where
    D: serde::Deserializer<'de>,
    C: QualitativeChoice,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(C::from_key))
}

/// A monthly scorecard as filed by a consultant or the business itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardSubmission {
    pub business_id: BusinessId,
    pub business_name: String,
    pub period: ReportingPeriod,
    pub source: SubmissionSource,
    #[serde(default)]
    pub financial: FinancialVariances,
    #[serde(default)]
    pub productivity: ProductivityFigures,
    #[serde(default)]
    pub qualitative: QualitativeAssessment,
    #[serde(default)]
    pub commentary: Option<String>,
    pub submitted_on: NaiveDate,
}

/// Partially filled scorecard inputs, as a live form holds them between
/// keystrokes. Everything is optional; scoring treats absence as neutral.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorecardDraft {
    pub business_id: Option<BusinessId>,
    pub period: Option<ReportingPeriod>,
    pub financial: FinancialVariances,
    pub productivity: ProductivityFigures,
    pub qualitative: QualitativeAssessment,
}
