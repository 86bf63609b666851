use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use ssb_prep::assessments::attempts::{
    AssessmentKind, AttemptId, AttemptRecord, AttemptRepository, CandidateId, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local attempt store backing the default deployment. A real
/// installation swaps this for a database-backed implementation of
/// `AttemptRepository`.
#[derive(Default)]
pub(crate) struct InMemoryAttemptRepository {
    records: Mutex<Vec<AttemptRecord>>,
}

impl AttemptRepository for InMemoryAttemptRepository {
    fn insert(&self, record: AttemptRecord) -> Result<AttemptRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.attempt_id == record.attempt_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.attempt_id == id).cloned())
    }

    fn latest(
        &self,
        candidate: &CandidateId,
        kind: AssessmentKind,
    ) -> Result<Option<AttemptRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .find(|record| &record.candidate_id == candidate && record.outcome.kind() == kind)
            .cloned())
    }

    fn history(
        &self,
        candidate: &CandidateId,
        kind: AssessmentKind,
        limit: usize,
    ) -> Result<Vec<AttemptRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| &record.candidate_id == candidate && record.outcome.kind() == kind)
            .take(limit)
            .cloned()
            .collect())
    }
}
