//! Composite readiness index.
//!
//! Blends the most recent score of the four scored batteries into a single
//! display number. Absent modules count as zero; the result is rounded to
//! the nearest integer and carries no risk tier.

use serde::{Deserialize, Serialize};

const PIQ_WEIGHT: f64 = 0.25;
const SITUATIONAL_WEIGHT: f64 = 0.25;
const WORD_ASSOCIATION_WEIGHT: f64 = 0.20;
const NARRATIVE_WEIGHT: f64 = 0.30;

/// Latest per-module scores, as percentages (PIQ uses its 0–100 aggregate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleScores {
    pub piq: Option<f64>,
    pub situational: Option<f64>,
    pub word_association: Option<f64>,
    pub narrative: Option<f64>,
}

/// Weighted blend of the four module scores.
pub fn readiness_index(scores: &ModuleScores) -> u32 {
    let blended = scores.piq.unwrap_or(0.0) * PIQ_WEIGHT
        + scores.situational.unwrap_or(0.0) * SITUATIONAL_WEIGHT
        + scores.word_association.unwrap_or(0.0) * WORD_ASSOCIATION_WEIGHT
        + scores.narrative.unwrap_or(0.0) * NARRATIVE_WEIGHT;
    blended.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_marks_blend_to_one_hundred() {
        let scores = ModuleScores {
            piq: Some(100.0),
            situational: Some(100.0),
            word_association: Some(100.0),
            narrative: Some(100.0),
        };
        assert_eq!(readiness_index(&scores), 100);
    }

    #[test]
    fn absent_modules_default_to_zero() {
        let scores = ModuleScores {
            piq: Some(80.0),
            situational: None,
            word_association: None,
            narrative: None,
        };
        assert_eq!(readiness_index(&scores), 20);
        assert_eq!(readiness_index(&ModuleScores::default()), 0);
    }

    #[test]
    fn weights_favor_the_narrative_battery() {
        let narrative_only = ModuleScores {
            narrative: Some(90.0),
            ..ModuleScores::default()
        };
        let word_only = ModuleScores {
            word_association: Some(90.0),
            ..ModuleScores::default()
        };
        assert_eq!(readiness_index(&narrative_only), 27);
        assert_eq!(readiness_index(&word_only), 18);
    }

    #[test]
    fn result_rounds_to_nearest_integer() {
        let scores = ModuleScores {
            piq: Some(75.0),
            situational: Some(66.0),
            word_association: Some(71.0),
            narrative: Some(83.0),
        };
        // 18.75 + 16.5 + 14.2 + 24.9 = 74.35
        assert_eq!(readiness_index(&scores), 74);
    }
}
