use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessments::attempts::domain::{
    AssessmentKind, AttemptId, AttemptRecord, CandidateId,
};
use crate::assessments::attempts::intake::{
    NarrativeAnswer, PhysicalSubmission, PiqSubmission, SituationalAnswer, WordAssociationAnswer,
};
use crate::assessments::attempts::repository::{AttemptRepository, RepositoryError};
use crate::assessments::attempts::router::assessment_router;
use crate::assessments::attempts::service::AssessmentService;

pub(super) fn candidate() -> CandidateId {
    CandidateId("cand-007".to_string())
}

pub(super) fn situational_answers() -> Vec<SituationalAnswer> {
    vec![SituationalAnswer {
        prompt_id: "srt-001".to_string(),
        theme: Some("Leadership".to_string()),
        response: "I will quickly organize the team and alert the authorities to handle the situation."
            .to_string(),
    }]
}

pub(super) fn hedging_situational_answers() -> Vec<SituationalAnswer> {
    vec![SituationalAnswer {
        prompt_id: "srt-002".to_string(),
        theme: None,
        response: "maybe i will try".to_string(),
    }]
}

pub(super) fn narrative_answers() -> Vec<NarrativeAnswer> {
    vec![NarrativeAnswer {
        picture_id: "tat-001".to_string(),
        theme: Some("Crisis Response".to_string()),
        difficulty: Some("hard".to_string()),
        story: "The young officer noticed the flood had stranded several villagers near the \
                bridge. He stayed calm, made a plan, and organized the rescue with his team. \
                First he assigned volunteers to guide children, then arranged boats. Finally \
                everyone was saved and reached the camp safely, and the village returned to \
                normal."
            .to_string(),
    }]
}

pub(super) fn word_answers() -> Vec<WordAssociationAnswer> {
    vec![WordAssociationAnswer {
        word_id: "wat-001".to_string(),
        word: "duty".to_string(),
        theme: Some("Character".to_string()),
        difficulty: Some("hard".to_string()),
        sentence: "I train daily and my duty guides me to serve the nation.".to_string(),
    }]
}

pub(super) fn piq_submission() -> PiqSubmission {
    PiqSubmission {
        position_of_responsibility: true,
        team_sports_years: 3,
        ncc_involvement: true,
        sports_level: "state".to_string(),
        organized_event: true,
        volunteer_work: true,
        family_responsibility: true,
        academic_consistency: true,
        public_speaking: true,
        competitive_achievements: true,
        attempt_number: 1,
    }
}

pub(super) fn physical_submission() -> PhysicalSubmission {
    PhysicalSubmission {
        height_cm: 170.0,
        weight_kg: 70.0,
        vision: "6/6".to_string(),
        flat_foot: false,
        color_blindness: false,
        surgery_history: false,
        pushup_count: 45,
        run_minutes: 5.0,
        situp_count: 45,
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    (AssessmentService::new(repository.clone()), repository)
}

pub(super) fn service_router(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<AttemptRecord>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Vec<AttemptRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl AttemptRepository for MemoryRepository {
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

pub(super) struct ConflictRepository;

impl AttemptRepository for ConflictRepository {
    fn insert(&self, _record: AttemptRecord) -> Result<AttemptRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError> {
        Ok(None)
    }

    fn latest(
        &self,
        _candidate: &CandidateId,
        _kind: AssessmentKind,
    ) -> Result<Option<AttemptRecord>, RepositoryError> {
        Ok(None)
    }

    fn history(
        &self,
        _candidate: &CandidateId,
        _kind: AssessmentKind,
        _limit: usize,
    ) -> Result<Vec<AttemptRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AttemptRepository for UnavailableRepository {
    fn insert(&self, _record: AttemptRecord) -> Result<AttemptRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest(
        &self,
        _candidate: &CandidateId,
        _kind: AssessmentKind,
    ) -> Result<Option<AttemptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn history(
        &self,
        _candidate: &CandidateId,
        _kind: AssessmentKind,
        _limit: usize,
    ) -> Result<Vec<AttemptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
