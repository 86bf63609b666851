//! Boundary layer around the pure scoring engines: intake validation,
//! attempt persistence, and the HTTP surface.
//!
//! The engines themselves are storage-agnostic; everything identity-shaped
//! (attempt ids, timestamps, candidate keys) is assigned here.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentKind, AssessmentOutcome, AttemptId, AttemptRecord, AttemptView, CandidateId,
    ReadinessView,
};
pub use intake::{
    IntakeGuard, IntakeViolation, NarrativeAnswer, PhysicalSubmission, PiqSubmission,
    SituationalAnswer, WordAssociationAnswer,
};
pub use repository::{AttemptRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
