use serde::{Deserialize, Serialize};

use crate::assessments::support::risk::RiskLevel;

use super::questions::FollowUpQuestion;

/// Highest level of organized sports competition the candidate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportsLevel {
    None,
    School,
    District,
    State,
}

impl SportsLevel {
    /// District and state participation count as competitive evidence.
    pub const fn is_competitive(self) -> bool {
        matches!(self, SportsLevel::District | SportsLevel::State)
    }

    pub const fn label(self) -> &'static str {
        match self {
            SportsLevel::None => "none",
            SportsLevel::School => "school",
            SportsLevel::District => "district",
            SportsLevel::State => "state",
        }
    }
}

/// Structured biographical self-report (the PIQ). Numeric fields arrive
/// already clamped by the intake boundary: `team_sports_years` to 0–20,
/// `attempt_number` to 1–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiqProfile {
    pub position_of_responsibility: bool,
    pub team_sports_years: u8,
    pub ncc_involvement: bool,
    pub sports_level: SportsLevel,
    pub organized_event: bool,
    pub volunteer_work: bool,
    pub family_responsibility: bool,
    pub academic_consistency: bool,
    pub public_speaking: bool,
    pub competitive_achievements: bool,
    pub attempt_number: u8,
}

/// The six officer-like-quality dimensions. Values are derived by the
/// engine, never set directly, and always sit in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OlqScores {
    pub leadership: u8,
    pub initiative: u8,
    pub responsibility: u8,
    pub social_adaptability: u8,
    pub confidence: u8,
    pub consistency: u8,
}

impl OlqScores {
    pub fn get(&self, olq: OlqTrait) -> u8 {
        match olq {
            OlqTrait::Leadership => self.leadership,
            OlqTrait::Initiative => self.initiative,
            OlqTrait::Responsibility => self.responsibility,
            OlqTrait::SocialAdaptability => self.social_adaptability,
            OlqTrait::Confidence => self.confidence,
            OlqTrait::Consistency => self.consistency,
        }
    }
}

/// Names the trait a derived score or follow-up question refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OlqTrait {
    Leadership,
    Initiative,
    Responsibility,
    SocialAdaptability,
    Confidence,
    Consistency,
}

impl OlqTrait {
    pub const fn label(self) -> &'static str {
        match self {
            OlqTrait::Leadership => "leadership",
            OlqTrait::Initiative => "initiative",
            OlqTrait::Responsibility => "responsibility",
            OlqTrait::SocialAdaptability => "social_adaptability",
            OlqTrait::Confidence => "confidence",
            OlqTrait::Consistency => "consistency",
        }
    }
}

/// Full PIQ evaluation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiqReport {
    pub olq: OlqScores,
    pub aggregate_score: u8,
    pub risk: RiskLevel,
    pub follow_up_questions: Vec<FollowUpQuestion>,
}
