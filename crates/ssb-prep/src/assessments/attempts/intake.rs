//! Intake boundary between loosely-typed request payloads and the typed
//! engine inputs.
//!
//! The engines assume well-formed, range-clamped input; this guard is
//! where that contract is enforced. Numeric self-report fields are clamped
//! to their documented ranges, missing theme labels and difficulty tags
//! fall back to their defaults, and unknown enum tags are rejected.

use serde::Deserialize;

use crate::assessments::narrative::NarrativeItem;
use crate::assessments::physical::{PhysicalProfile, VisionCategory};
use crate::assessments::piq::{PiqProfile, SportsLevel};
use crate::assessments::situational::SituationalItem;
use crate::assessments::support::Difficulty;
use crate::assessments::word_association::WordAssociationItem;

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("submission contained no answers")]
    EmptyAnswerSet,
    #[error("unknown sports participation level '{0}'")]
    UnknownSportsLevel(String),
    #[error("unknown vision category '{0}'")]
    UnknownVisionCategory(String),
}

/// Raw situational answer as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SituationalAnswer {
    pub prompt_id: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub response: String,
}

/// Raw narrative answer as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeAnswer {
    pub picture_id: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub story: String,
}

/// Raw word-association answer as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct WordAssociationAnswer {
    pub word_id: String,
    pub word: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub sentence: String,
}

/// Raw PIQ submission; numerics are wide on purpose so the guard can clamp.
#[derive(Debug, Clone, Deserialize)]
pub struct PiqSubmission {
    pub position_of_responsibility: bool,
    pub team_sports_years: u32,
    pub ncc_involvement: bool,
    pub sports_level: String,
    pub organized_event: bool,
    pub volunteer_work: bool,
    pub family_responsibility: bool,
    pub academic_consistency: bool,
    pub public_speaking: bool,
    pub competitive_achievements: bool,
    pub attempt_number: u32,
}

/// Raw physical submission.
#[derive(Debug, Clone, Deserialize)]
pub struct PhysicalSubmission {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub vision: String,
    #[serde(default)]
    pub flat_foot: bool,
    #[serde(default)]
    pub color_blindness: bool,
    #[serde(default)]
    pub surgery_history: bool,
    pub pushup_count: u32,
    pub run_minutes: f64,
    pub situp_count: u32,
}

/// Stateless converter from submissions to typed engine input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn situational_input(
        &self,
        answers: Vec<SituationalAnswer>,
    ) -> Result<Vec<SituationalItem>, IntakeViolation> {
        if answers.is_empty() {
            return Err(IntakeViolation::EmptyAnswerSet);
        }
        Ok(answers
            .into_iter()
            .map(|answer| SituationalItem {
                prompt_id: answer.prompt_id,
                theme: answer.theme,
                response: answer.response,
            })
            .collect())
    }

    pub fn narrative_input(
        &self,
        answers: Vec<NarrativeAnswer>,
    ) -> Result<Vec<NarrativeItem>, IntakeViolation> {
        if answers.is_empty() {
            return Err(IntakeViolation::EmptyAnswerSet);
        }
        Ok(answers
            .into_iter()
            .map(|answer| NarrativeItem {
                picture_id: answer.picture_id,
                theme: answer.theme,
                difficulty: difficulty_tag(answer.difficulty.as_deref()),
                story: answer.story,
            })
            .collect())
    }

    pub fn word_association_input(
        &self,
        answers: Vec<WordAssociationAnswer>,
    ) -> Result<Vec<WordAssociationItem>, IntakeViolation> {
        if answers.is_empty() {
            return Err(IntakeViolation::EmptyAnswerSet);
        }
        Ok(answers
            .into_iter()
            .map(|answer| WordAssociationItem {
                word_id: answer.word_id,
                word: answer.word,
                difficulty: difficulty_tag(answer.difficulty.as_deref()),
                theme: answer.theme,
                sentence: answer.sentence,
            })
            .collect())
    }

    pub fn piq_profile(&self, submission: PiqSubmission) -> Result<PiqProfile, IntakeViolation> {
        let sports_level = match submission.sports_level.trim().to_ascii_lowercase().as_str() {
            "none" => SportsLevel::None,
            "school" => SportsLevel::School,
            "district" => SportsLevel::District,
            "state" => SportsLevel::State,
            other => return Err(IntakeViolation::UnknownSportsLevel(other.to_string())),
        };

        Ok(PiqProfile {
            position_of_responsibility: submission.position_of_responsibility,
            team_sports_years: submission.team_sports_years.clamp(0, 20) as u8,
            ncc_involvement: submission.ncc_involvement,
            sports_level,
            organized_event: submission.organized_event,
            volunteer_work: submission.volunteer_work,
            family_responsibility: submission.family_responsibility,
            academic_consistency: submission.academic_consistency,
            public_speaking: submission.public_speaking,
            competitive_achievements: submission.competitive_achievements,
            attempt_number: submission.attempt_number.clamp(1, 10) as u8,
        })
    }

    pub fn physical_profile(
        &self,
        submission: PhysicalSubmission,
    ) -> Result<PhysicalProfile, IntakeViolation> {
        let vision = match submission.vision.trim().to_ascii_lowercase().as_str() {
            "normal" | "6/6" => VisionCategory::Normal,
            "correctable" | "corrected" | "glasses" => VisionCategory::Correctable,
            "none" | "inadequate" => VisionCategory::Inadequate,
            other => return Err(IntakeViolation::UnknownVisionCategory(other.to_string())),
        };

        Ok(PhysicalProfile {
            height_cm: submission.height_cm.clamp(50.0, 250.0),
            weight_kg: submission.weight_kg.clamp(20.0, 200.0),
            vision,
            flat_foot: submission.flat_foot,
            color_blindness: submission.color_blindness,
            surgery_history: submission.surgery_history,
            pushup_count: submission.pushup_count,
            run_minutes: submission.run_minutes,
            situp_count: submission.situp_count,
        })
    }
}

/// Unknown or missing tags fall back to medium rather than rejecting the
/// whole submission.
fn difficulty_tag(raw: Option<&str>) -> Difficulty {
    match raw.map(|tag| tag.trim().to_ascii_lowercase()) {
        Some(tag) if tag == "easy" => Difficulty::Easy,
        Some(tag) if tag == "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}
