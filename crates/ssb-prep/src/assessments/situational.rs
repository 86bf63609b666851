//! Situational-reaction scoring.
//!
//! Each free-text reaction to a hypothetical situation is scored against
//! fixed behavioral vocabularies: a non-empty response starts at 1 and earns
//! bonuses for concrete action, first-person commitment, composure, and
//! clarity, with penalties for hedging and aggression. Item scores clamp to
//! [0, 5].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::support::breakdown::{ThemeAccumulator, ThemeBreakdown};
use super::support::risk::{RiskLevel, TEXT_BATTERY_THRESHOLDS};
use super::support::vocabulary;

/// Maximum score a single reaction can earn.
pub const ITEM_MAX_SCORE: u32 = 5;

const ACTION_WORDS: &[&str] = &[
    "help",
    "rescue",
    "alert",
    "organize",
    "organise",
    "intervene",
    "assist",
    "inform",
    "report",
    "guide",
    "lead",
    "protect",
    "secure",
    "evacuate",
    "first aid",
    "call the police",
];

const COMMITMENT_PHRASES: &[&str] = &[
    "i will",
    "i'll",
    "i shall",
    "i ensure",
    "i make sure",
    "i take charge",
    "i immediately",
    "my duty",
];

const PANIC_WORDS: &[&str] = &[
    "panic",
    "cry",
    "freeze",
    "scared",
    "terrified",
    "helpless",
    "give up",
    "run away",
    "afraid",
];

const HEDGING_WORDS: &[&str] = &[
    "try",
    "maybe",
    "probably",
    "perhaps",
    "possibly",
    "i think",
    "not sure",
    "somehow",
];

const AGGRESSION_WORDS: &[&str] = &["hit", "beat", "kill", "slap", "punch", "shoot"];

/// One situational prompt together with the candidate's free-text reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationalItem {
    pub prompt_id: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub response: String,
}

/// Aggregated outcome for one situational attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationalReport {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk: RiskLevel,
    pub themes: BTreeMap<String, ThemeBreakdown>,
}

/// Score a full sequence of situational reactions.
pub fn evaluate(items: &[SituationalItem]) -> SituationalReport {
    let mut total_score = 0u32;
    let mut themes = ThemeAccumulator::default();

    for item in items {
        let score = score_reaction(&item.response);
        total_score += score;
        themes.record(
            item.theme.as_deref(),
            f64::from(score),
            f64::from(ITEM_MAX_SCORE),
        );
    }

    let max_score = ITEM_MAX_SCORE * items.len() as u32;
    let percentage = if max_score == 0 {
        0.0
    } else {
        f64::from(total_score) / f64::from(max_score) * 100.0
    };

    SituationalReport {
        total_score,
        max_score,
        percentage,
        risk: TEXT_BATTERY_THRESHOLDS.classify(percentage),
        themes: themes.finish(),
    }
}

fn score_reaction(response: &str) -> u32 {
    let text = response.trim().to_lowercase();
    if text.is_empty() {
        return 0;
    }

    let length = text.chars().count();
    let hedging = vocabulary::contains_any(&text, HEDGING_WORDS);

    let mut score: i32 = 1;
    if vocabulary::contains_any(&text, ACTION_WORDS) {
        score += 1;
    }
    if vocabulary::contains_any(&text, COMMITMENT_PHRASES) {
        score += 1;
    }
    if !vocabulary::contains_any(&text, PANIC_WORDS) && length > 10 {
        score += 1;
    }
    if !hedging && length > 5 {
        score += 1;
    }
    if hedging || length < 10 {
        score -= 1;
    }
    // Aggression is penalized independently of every other signal.
    if vocabulary::contains_any(&text, AGGRESSION_WORDS) {
        score -= 1;
    }

    score.clamp(0, ITEM_MAX_SCORE as i32) as u32
}
