//! Personal-history (PIQ) scoring.
//!
//! A pure function chain: profile -> six OLQ trait scores -> weighted
//! aggregate -> risk tier, plus follow-up question generation keyed off the
//! weakest traits. Each trait accumulates fixed point contributions from
//! specific profile fields and clamps to [0, 10].

mod domain;
mod questions;

pub use domain::{OlqScores, OlqTrait, PiqProfile, PiqReport, SportsLevel};
pub use questions::{FollowUpQuestion, MAX_QUESTIONS};

use super::support::risk::TEXT_BATTERY_THRESHOLDS;

/// Per-trait weights applied when blending the six OLQ scores.
const LEADERSHIP_WEIGHT: f64 = 1.2;
const INITIATIVE_WEIGHT: f64 = 1.0;
const RESPONSIBILITY_WEIGHT: f64 = 1.2;
const SOCIAL_ADAPTABILITY_WEIGHT: f64 = 1.0;
const CONFIDENCE_WEIGHT: f64 = 1.0;
const CONSISTENCY_WEIGHT: f64 = 1.0;

/// All six traits at 10 under the weights above.
const MAX_WEIGHTED_SUM: f64 = 64.0;

const TRAIT_CEILING: u32 = 10;

/// Evaluate a biographical profile end to end.
pub fn evaluate(profile: &PiqProfile) -> PiqReport {
    let olq = derive_olq_scores(profile);
    let aggregate_score = aggregate(&olq);
    PiqReport {
        olq,
        aggregate_score,
        risk: TEXT_BATTERY_THRESHOLDS.classify(f64::from(aggregate_score)),
        follow_up_questions: questions::generate(&olq, profile),
    }
}

/// Derive the six OLQ trait scores from the profile's field contributions.
pub fn derive_olq_scores(profile: &PiqProfile) -> OlqScores {
    let mut leadership = 0u32;
    if profile.position_of_responsibility {
        leadership += 3;
    }
    if profile.team_sports_years >= 2 {
        leadership += 2;
    }
    if profile.ncc_involvement {
        leadership += 2;
    }
    if profile.sports_level.is_competitive() {
        leadership += 2;
    }

    let mut initiative = 0u32;
    if profile.organized_event {
        initiative += 3;
    }
    if profile.volunteer_work {
        initiative += 2;
    }
    if profile.public_speaking {
        initiative += 1;
    }
    if profile.competitive_achievements {
        initiative += 1;
    }

    let mut responsibility = 0u32;
    if profile.position_of_responsibility {
        responsibility += 2;
    }
    if profile.family_responsibility {
        responsibility += 2;
    }
    if profile.volunteer_work {
        responsibility += 2;
    }
    if profile.academic_consistency {
        responsibility += 1;
    }

    let mut social_adaptability = 0u32;
    if profile.team_sports_years >= 2 {
        social_adaptability += 3;
    }
    if profile.volunteer_work {
        social_adaptability += 2;
    }
    if profile.organized_event {
        social_adaptability += 2;
    }
    if profile.public_speaking {
        social_adaptability += 1;
    }

    let mut confidence = 0u32;
    if profile.public_speaking {
        confidence += 3;
    }
    if profile.competitive_achievements {
        confidence += 2;
    }
    if profile.sports_level != SportsLevel::None {
        confidence += 2;
    }
    if profile.position_of_responsibility {
        confidence += 2;
    }

    let mut consistency = 0u32;
    if profile.academic_consistency {
        consistency += 3;
    }
    if profile.team_sports_years >= 3 {
        consistency += 2;
    }
    if profile.ncc_involvement {
        consistency += 2;
    }
    if profile.attempt_number == 1 {
        consistency += 1;
    }

    OlqScores {
        leadership: clamp_trait(leadership),
        initiative: clamp_trait(initiative),
        responsibility: clamp_trait(responsibility),
        social_adaptability: clamp_trait(social_adaptability),
        confidence: clamp_trait(confidence),
        consistency: clamp_trait(consistency),
    }
}

fn clamp_trait(points: u32) -> u8 {
    points.min(TRAIT_CEILING) as u8
}

fn aggregate(olq: &OlqScores) -> u8 {
    let weighted = f64::from(olq.leadership) * LEADERSHIP_WEIGHT
        + f64::from(olq.initiative) * INITIATIVE_WEIGHT
        + f64::from(olq.responsibility) * RESPONSIBILITY_WEIGHT
        + f64::from(olq.social_adaptability) * SOCIAL_ADAPTABILITY_WEIGHT
        + f64::from(olq.confidence) * CONFIDENCE_WEIGHT
        + f64::from(olq.consistency) * CONSISTENCY_WEIGHT;
    (weighted / MAX_WEIGHTED_SUM * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::support::risk::RiskLevel;

    fn strong_profile() -> PiqProfile {
        PiqProfile {
            position_of_responsibility: true,
            team_sports_years: 3,
            ncc_involvement: true,
            sports_level: SportsLevel::State,
            organized_event: true,
            volunteer_work: true,
            family_responsibility: true,
            academic_consistency: true,
            public_speaking: true,
            competitive_achievements: true,
            attempt_number: 1,
        }
    }

    fn blank_profile() -> PiqProfile {
        PiqProfile {
            position_of_responsibility: false,
            team_sports_years: 0,
            ncc_involvement: false,
            sports_level: SportsLevel::None,
            organized_event: false,
            volunteer_work: false,
            family_responsibility: false,
            academic_consistency: false,
            public_speaking: false,
            competitive_achievements: false,
            attempt_number: 1,
        }
    }

    #[test]
    fn strong_profile_scores_per_weight_tables() {
        let olq = derive_olq_scores(&strong_profile());
        assert_eq!(olq.leadership, 9);
        assert_eq!(olq.initiative, 7);
        assert_eq!(olq.responsibility, 7);
        assert_eq!(olq.social_adaptability, 8);
        assert_eq!(olq.confidence, 9);
        assert_eq!(olq.consistency, 8);
    }

    #[test]
    fn strong_profile_clears_the_low_risk_bar_with_no_questions() {
        let report = evaluate(&strong_profile());
        // Weighted sum 51.2 over a 64 ceiling.
        assert_eq!(report.aggregate_score, 80);
        assert_eq!(report.risk, RiskLevel::Low);
        assert!(report.follow_up_questions.is_empty());
    }

    #[test]
    fn blank_profile_bottoms_out_high_risk() {
        let report = evaluate(&blank_profile());
        assert_eq!(report.olq.leadership, 0);
        assert_eq!(report.olq.consistency, 1);
        assert_eq!(report.risk, RiskLevel::High);
    }

    #[test]
    fn traits_never_leave_their_bounds() {
        let profiles = [strong_profile(), blank_profile()];
        for profile in &profiles {
            let olq = derive_olq_scores(profile);
            for olq_trait in [
                OlqTrait::Leadership,
                OlqTrait::Initiative,
                OlqTrait::Responsibility,
                OlqTrait::SocialAdaptability,
                OlqTrait::Confidence,
                OlqTrait::Consistency,
            ] {
                assert!(olq.get(olq_trait) <= 10);
            }
            let report = evaluate(profile);
            assert!(report.aggregate_score <= 100);
        }
    }

    #[test]
    fn question_generation_caps_at_five_in_rule_order() {
        let mut profile = blank_profile();
        profile.attempt_number = 3;

        let report = evaluate(&profile);
        let questions = &report.follow_up_questions;
        assert_eq!(questions.len(), MAX_QUESTIONS);

        // Leadership rules fire first, then initiative, then the
        // sports-absence and repeat-attempt probes; later rules are cut.
        assert_eq!(questions[0].olq_trait, OlqTrait::Leadership);
        assert_eq!(questions[1].olq_trait, OlqTrait::Leadership);
        assert_eq!(questions[2].olq_trait, OlqTrait::Initiative);
        assert_eq!(questions[3].olq_trait, OlqTrait::Initiative);
        assert_eq!(questions[4].olq_trait, OlqTrait::SocialAdaptability);
    }

    #[test]
    fn repeat_attempt_alone_draws_a_preparation_question() {
        let mut profile = strong_profile();
        profile.attempt_number = 2;

        let report = evaluate(&profile);
        assert_eq!(report.follow_up_questions.len(), 1);
        assert_eq!(
            report.follow_up_questions[0].olq_trait,
            OlqTrait::Consistency
        );
        assert!(report.follow_up_questions[0]
            .question
            .contains("previous attempt"));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let profile = strong_profile();
        assert_eq!(evaluate(&profile), evaluate(&profile));
    }
}
