use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::scorecards::domain::{
    BusinessId, FinancialVariances, ProductivityFigures, QualitativeAssessment, ReportingPeriod,
    ScorecardId, ScorecardSubmission, SubmissionSource,
};
use crate::scorecards::repository::{
    AlertError, RepositoryError, ReviewAlert, ReviewAlertPublisher, ScorecardRecord,
    ScorecardRepository,
};
use crate::scorecards::scoring::qualitative::{
    LeadershipChoice, MarketDemandChoice, MarketingChoice, ProductStrengthChoice,
    SalesExecutionChoice, SupplierStrengthChoice,
};
use crate::scorecards::service::ScorecardService;

pub(super) fn period(year: i32, month: u32) -> ReportingPeriod {
    ReportingPeriod::new(year, month)
}

pub(super) fn submitted_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).expect("valid date")
}

fn base_submission(business: &str, period: ReportingPeriod) -> ScorecardSubmission {
    ScorecardSubmission {
        business_id: BusinessId(business.to_string()),
        business_name: format!("{business} Ltd"),
        period,
        source: SubmissionSource::Consultant,
        financial: FinancialVariances::default(),
        productivity: ProductivityFigures::default(),
        qualitative: QualitativeAssessment::default(),
        commentary: None,
        submitted_on: submitted_on(),
    }
}

/// Every metric beating target; scores a flat 100.
pub(super) fn strong_submission(business: &str, period: ReportingPeriod) -> ScorecardSubmission {
    let mut submission = base_submission(business, period);
    submission.financial = FinancialVariances {
        revenue: Some(15.0),
        gross_profit: Some(15.0),
        overheads: Some(-15.0),
        net_profit: Some(15.0),
    };
    submission.productivity = ProductivityFigures {
        benchmark: Some(2.0),
        actual: Some(2.4),
    };
    submission.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Aligned),
        market_demand: Some(MarketDemandChoice::Strong),
        marketing: Some(MarketingChoice::Clear),
        product_strength: Some(ProductStrengthChoice::Differentiated),
        supplier_strength: Some(SupplierStrengthChoice::Strong),
        sales_execution: Some(SalesExecutionChoice::Beating),
    };
    submission
}

/// Strong financials with thin qualitative answers; lands at 65, amber.
pub(super) fn amber_submission(business: &str, period: ReportingPeriod) -> ScorecardSubmission {
    let mut submission = strong_submission(business, period);
    submission.qualitative = QualitativeAssessment {
        leadership: Some(LeadershipChoice::Aligned),
        market_demand: Some(MarketDemandChoice::Flat),
        ..QualitativeAssessment::default()
    };
    submission
}

/// On-target variances and nothing else; lands at 30, red.
pub(super) fn neutral_submission(business: &str, period: ReportingPeriod) -> ScorecardSubmission {
    let mut submission = base_submission(business, period);
    submission.financial = FinancialVariances {
        revenue: Some(0.0),
        gross_profit: Some(0.0),
        overheads: Some(0.0),
        net_profit: Some(0.0),
    };
    submission
}

pub(super) fn build_service() -> (
    ScorecardService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = ScorecardService::new(repository.clone(), alerts.clone());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ScorecardId, ScorecardRecord>>>,
}

impl ScorecardRepository for MemoryRepository {
    fn insert(&self, record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let duplicate = guard.values().any(|existing| {
            existing.submission.business_id == record.submission.business_id
                && existing.submission.period == record.submission.period
                && existing.submission.source == record.submission.source
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.scorecard_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ScorecardId) -> Result<Option<ScorecardRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn latest_for_business(
        &self,
        business: &BusinessId,
        period: &ReportingPeriod,
    ) -> Result<Option<ScorecardRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| {
                record.submission.business_id == *business && record.submission.period < *period
            })
            .max_by_key(|record| record.submission.period)
            .cloned())
    }

    fn for_business(&self, business: &BusinessId) -> Result<Vec<ScorecardRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard
            .values()
            .filter(|record| record.submission.business_id == *business)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.submission.period.cmp(&a.submission.period));
        Ok(records)
    }

    fn all(&self) -> Result<Vec<ScorecardRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl ReviewAlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ScorecardRepository for UnavailableRepository {
    fn insert(&self, _record: ScorecardRecord) -> Result<ScorecardRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ScorecardId) -> Result<Option<ScorecardRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for_business(
        &self,
        _business: &BusinessId,
        _period: &ReportingPeriod,
    ) -> Result<Option<ScorecardRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_business(
        &self,
        _business: &BusinessId,
    ) -> Result<Vec<ScorecardRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<ScorecardRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
