//! Follow-up interview question generation.
//!
//! The rule list runs in a fixed order that encodes interviewer priority:
//! leadership, initiative, sports absence, repeat attempt, social
//! adaptability, confidence. Do not reorder. Generation stops as soon as
//! the cap is reached.

use serde::{Deserialize, Serialize};

use super::domain::{OlqScores, OlqTrait, PiqProfile, SportsLevel};

/// A question the interviewer is likely to press on, with the reasoning
/// behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub question: String,
    pub rationale: String,
    pub olq_trait: OlqTrait,
}

/// Never emit more than this many questions.
pub const MAX_QUESTIONS: usize = 5;

/// Trait scores below this mark a focus area for the interview.
const FOCUS_THRESHOLD: u8 = 5;

pub(super) fn generate(olq: &OlqScores, profile: &PiqProfile) -> Vec<FollowUpQuestion> {
    let mut questions = Vec::new();

    if olq.leadership < FOCUS_THRESHOLD {
        push(
            &mut questions,
            OlqTrait::Leadership,
            "Describe a time you took charge of a group without being asked to.",
            "Leadership evidence in the personal history is thin; the board will probe for latent examples.",
        );
        push(
            &mut questions,
            OlqTrait::Leadership,
            "If your team disagreed with your decision, how would you bring them along?",
            "Tests whether the candidate can hold a direction under pushback.",
        );
    }

    if olq.initiative < FOCUS_THRESHOLD {
        push(
            &mut questions,
            OlqTrait::Initiative,
            "Tell us about something you started on your own, without anyone assigning it.",
            "Low initiative signals; the board looks for self-started work.",
        );
        push(
            &mut questions,
            OlqTrait::Initiative,
            "What did you do the last time you saw a problem nobody owned?",
            "Separates candidates who wait for instructions from those who move first.",
        );
    }

    if profile.sports_level == SportsLevel::None {
        push(
            &mut questions,
            OlqTrait::SocialAdaptability,
            "You have not played organized sports. How do you handle competition and losing?",
            "No sports participation on record; competitive temperament must be probed another way.",
        );
    }

    if profile.attempt_number > 1 {
        push(
            &mut questions,
            OlqTrait::Consistency,
            "What did you change in your preparation after your previous attempt?",
            "Repeat attempts invite scrutiny of how the candidate responds to setbacks.",
        );
    }

    if olq.social_adaptability < FOCUS_THRESHOLD {
        push(
            &mut questions,
            OlqTrait::SocialAdaptability,
            "How do you adjust when you are placed with people you did not choose?",
            "Weak group-living evidence; the board will test adjustment to mixed company.",
        );
    }

    if olq.confidence < FOCUS_THRESHOLD {
        push(
            &mut questions,
            OlqTrait::Confidence,
            "Tell us about a moment you had to speak up in front of strangers.",
            "Little public-facing experience on record; composure under attention is unproven.",
        );
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

fn push(questions: &mut Vec<FollowUpQuestion>, olq_trait: OlqTrait, question: &str, rationale: &str) {
    if questions.len() >= MAX_QUESTIONS {
        return;
    }
    questions.push(FollowUpQuestion {
        question: question.to_string(),
        rationale: rationale.to_string(),
        olq_trait,
    });
}
