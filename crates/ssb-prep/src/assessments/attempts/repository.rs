use super::domain::{AssessmentKind, AttemptId, AttemptRecord, CandidateId};

/// Storage abstraction so the service module can be exercised in isolation.
/// Implementations decide ordering durability; `latest` and `history` are
/// expected to honor `recorded_at` with insertion order as the tiebreak.
pub trait AttemptRepository: Send + Sync {
    fn insert(&self, record: AttemptRecord) -> Result<AttemptRecord, RepositoryError>;
    fn fetch(&self, id: &AttemptId) -> Result<Option<AttemptRecord>, RepositoryError>;
    fn latest(
        &self,
        candidate: &CandidateId,
        kind: AssessmentKind,
    ) -> Result<Option<AttemptRecord>, RepositoryError>;
    fn history(
        &self,
        candidate: &CandidateId,
        kind: AssessmentKind,
        limit: usize,
    ) -> Result<Vec<AttemptRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("attempt already exists")]
    Conflict,
    #[error("attempt not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
