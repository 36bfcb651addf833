use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use scorecard::scorecards::{
    AlertError, BusinessId, RepositoryError, ReportingPeriod, ReviewAlert, ReviewAlertPublisher,
    ScorecardId, ScorecardRecord, ScorecardRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-process store standing in for the scorecard database during local
/// runs and demos.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScorecardRepository {
    records: Arc<Mutex<HashMap<ScorecardId, ScorecardRecord>>>,
}

impl ScorecardRepository for InMemoryScorecardRepository {
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

/// Captures review alerts in memory so demos and tests can show them.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReviewAlertPublisher {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl ReviewAlertPublisher for InMemoryReviewAlertPublisher {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryReviewAlertPublisher {
    pub(crate) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

pub(crate) fn parse_period(raw: &str) -> Result<ReportingPeriod, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM ({err})"))
}
