use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::assessments::{composite, narrative, physical, piq, situational, word_association};

use super::domain::{
    AssessmentKind, AssessmentOutcome, AttemptId, AttemptRecord, CandidateId, ReadinessView,
};
use super::intake::{
    IntakeGuard, IntakeViolation, NarrativeAnswer, PhysicalSubmission, PiqSubmission,
    SituationalAnswer, WordAssociationAnswer,
};
use super::repository::{AttemptRepository, RepositoryError};

/// Service composing the intake guard, the pure engines, and the
/// repository. Evaluation itself never touches storage; the service stamps
/// the identity and timestamp the engines are forbidden to produce.
pub struct AssessmentService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
}

static ATTEMPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_attempt_id() -> AttemptId {
    let id = ATTEMPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AttemptId(format!("att-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AttemptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
        }
    }

    pub fn submit_situational(
        &self,
        candidate_id: CandidateId,
        answers: Vec<SituationalAnswer>,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let items = self.guard.situational_input(answers)?;
        let report = situational::evaluate(&items);
        self.store(candidate_id, AssessmentOutcome::Situational(report))
    }

    pub fn submit_narrative(
        &self,
        candidate_id: CandidateId,
        answers: Vec<NarrativeAnswer>,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let items = self.guard.narrative_input(answers)?;
        let report = narrative::evaluate(&items);
        self.store(candidate_id, AssessmentOutcome::Narrative(report))
    }

    pub fn submit_word_association(
        &self,
        candidate_id: CandidateId,
        answers: Vec<WordAssociationAnswer>,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let items = self.guard.word_association_input(answers)?;
        let report = word_association::evaluate(&items);
        self.store(candidate_id, AssessmentOutcome::WordAssociation(report))
    }

    pub fn submit_piq(
        &self,
        candidate_id: CandidateId,
        submission: PiqSubmission,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let profile = self.guard.piq_profile(submission)?;
        let report = piq::evaluate(&profile);
        self.store(candidate_id, AssessmentOutcome::Piq(report))
    }

    pub fn submit_physical(
        &self,
        candidate_id: CandidateId,
        submission: PhysicalSubmission,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let profile = self.guard.physical_profile(submission)?;
        let report = physical::evaluate(&profile);
        self.store(candidate_id, AssessmentOutcome::Physical(report))
    }

    /// Fetch a stored attempt for API responses.
    pub fn attempt(&self, id: &AttemptId) -> Result<AttemptRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Blend the candidate's latest module scores into the readiness index.
    /// Batteries never attempted contribute zero.
    pub fn readiness(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<ReadinessView, AssessmentServiceError> {
        let latest_score = |kind| -> Result<Option<f64>, RepositoryError> {
            Ok(self
                .repository
                .latest(candidate_id, kind)?
                .map(|record| record.outcome.score()))
        };

        let scores = composite::ModuleScores {
            piq: latest_score(AssessmentKind::Piq)?,
            situational: latest_score(AssessmentKind::Situational)?,
            word_association: latest_score(AssessmentKind::WordAssociation)?,
            narrative: latest_score(AssessmentKind::Narrative)?,
        };

        Ok(ReadinessView {
            candidate_id: candidate_id.clone(),
            readiness_index: composite::readiness_index(&scores),
            piq: scores.piq,
            situational: scores.situational,
            word_association: scores.word_association,
            narrative: scores.narrative,
        })
    }

    fn store(
        &self,
        candidate_id: CandidateId,
        outcome: AssessmentOutcome,
    ) -> Result<AttemptRecord, AssessmentServiceError> {
        let record = AttemptRecord {
            attempt_id: next_attempt_id(),
            candidate_id,
            outcome,
            recorded_at: Utc::now(),
        };
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
