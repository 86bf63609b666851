use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::narrative::NarrativeReport;
use crate::assessments::physical::PhysicalReport;
use crate::assessments::piq::PiqReport;
use crate::assessments::situational::SituationalReport;
use crate::assessments::support::risk::RiskLevel;
use crate::assessments::word_association::WordAssociationReport;

/// Identifier wrapper for the candidate a result belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for stored attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub String);

/// The five scored batteries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Piq,
    Situational,
    WordAssociation,
    Narrative,
    Physical,
}

impl AssessmentKind {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentKind::Piq => "piq",
            AssessmentKind::Situational => "situational",
            AssessmentKind::WordAssociation => "word_association",
            AssessmentKind::Narrative => "narrative",
            AssessmentKind::Physical => "physical",
        }
    }
}

/// Tagged union over the five battery reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentOutcome {
    Piq(PiqReport),
    Situational(SituationalReport),
    WordAssociation(WordAssociationReport),
    Narrative(NarrativeReport),
    Physical(PhysicalReport),
}

impl AssessmentOutcome {
    pub const fn kind(&self) -> AssessmentKind {
        match self {
            AssessmentOutcome::Piq(_) => AssessmentKind::Piq,
            AssessmentOutcome::Situational(_) => AssessmentKind::Situational,
            AssessmentOutcome::WordAssociation(_) => AssessmentKind::WordAssociation,
            AssessmentOutcome::Narrative(_) => AssessmentKind::Narrative,
            AssessmentOutcome::Physical(_) => AssessmentKind::Physical,
        }
    }

    /// Score on the 0–100 scale used for readiness blending and views.
    pub fn score(&self) -> f64 {
        match self {
            AssessmentOutcome::Piq(report) => f64::from(report.aggregate_score),
            AssessmentOutcome::Situational(report) => report.percentage,
            AssessmentOutcome::WordAssociation(report) => report.percentage,
            AssessmentOutcome::Narrative(report) => report.percentage,
            AssessmentOutcome::Physical(report) => f64::from(report.total_score),
        }
    }

    pub fn risk(&self) -> RiskLevel {
        match self {
            AssessmentOutcome::Piq(report) => report.risk,
            AssessmentOutcome::Situational(report) => report.risk,
            AssessmentOutcome::WordAssociation(report) => report.risk,
            AssessmentOutcome::Narrative(report) => report.risk,
            AssessmentOutcome::Physical(report) => report.risk,
        }
    }
}

/// Repository record: one immutable evaluation, stamped by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_id: AttemptId,
    pub candidate_id: CandidateId,
    pub outcome: AssessmentOutcome,
    pub recorded_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn view(&self) -> AttemptView {
        AttemptView {
            attempt_id: self.attempt_id.clone(),
            candidate_id: self.candidate_id.clone(),
            battery: self.outcome.kind().label(),
            score: self.outcome.score(),
            risk: self.outcome.risk().label(),
            recorded_at: self.recorded_at,
        }
    }
}

/// Sanitized representation of a stored attempt for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptView {
    pub attempt_id: AttemptId,
    pub candidate_id: CandidateId,
    pub battery: &'static str,
    pub score: f64,
    pub risk: &'static str,
    pub recorded_at: DateTime<Utc>,
}

/// Composite readiness for one candidate, with the per-module scores that
/// fed it. `None` marks a battery the candidate has not attempted yet.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessView {
    pub candidate_id: CandidateId,
    pub readiness_index: u32,
    pub piq: Option<f64>,
    pub situational: Option<f64>,
    pub word_association: Option<f64>,
    pub narrative: Option<f64>,
}
