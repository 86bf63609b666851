//! Word-association scoring.
//!
//! Candidates build a sentence from a single stimulus word. Scoring rewards
//! usable length, the absence of negative/despair language, concrete action
//! words, and first-person responsibility markers. Responsibility markers
//! are matched as whole tokens so that "i" never matches inside another
//! word. Harder words carry a higher ceiling and a composure bonus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::support::breakdown::{ThemeAccumulator, ThemeBreakdown};
use super::support::risk::{RiskLevel, TEXT_BATTERY_THRESHOLDS};
use super::support::vocabulary;
use super::support::Difficulty;

const NEGATIVE_WORDS: &[&str] = &[
    "fail",
    "cry",
    "fear",
    "weak",
    "impossible",
    "never",
    "hate",
    "lose",
    "defeat",
    "quit",
    "death",
    "sad",
];

const ACTION_WORDS: &[&str] = &[
    "win",
    "lead",
    "fight",
    "achieve",
    "work",
    "train",
    "practice",
    "practise",
    "build",
    "serve",
    "help",
    "run",
];

/// Matched as whole tokens, not substrings.
const RESPONSIBILITY_TOKENS: &[&str] = &[
    "i",
    "my",
    "we",
    "our",
    "duty",
    "responsible",
    "responsibility",
];

/// One stimulus word together with the candidate's sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAssociationItem {
    pub word_id: String,
    pub word: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub theme: Option<String>,
    pub sentence: String,
}

/// Aggregated outcome for one word-association attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAssociationReport {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk: RiskLevel,
    pub themes: BTreeMap<String, ThemeBreakdown>,
}

/// Score ceiling for a stimulus word of the given difficulty.
pub const fn item_max(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 4,
        Difficulty::Hard => 5,
    }
}

/// Score a full sequence of word-association sentences.
pub fn evaluate(items: &[WordAssociationItem]) -> WordAssociationReport {
    let mut total_score = 0u32;
    let mut max_score = 0u32;
    let mut themes = ThemeAccumulator::default();

    for item in items {
        let ceiling = item_max(item.difficulty);
        let score = score_sentence(&item.sentence, item.difficulty);
        total_score += score;
        max_score += ceiling;
        themes.record(item.theme.as_deref(), f64::from(score), f64::from(ceiling));
    }

    let percentage = if max_score == 0 {
        0.0
    } else {
        (f64::from(total_score) / f64::from(max_score) * 100.0).round()
    };

    WordAssociationReport {
        total_score,
        max_score,
        percentage,
        risk: TEXT_BATTERY_THRESHOLDS.classify(percentage),
        themes: themes.finish(),
    }
}

fn score_sentence(sentence: &str, difficulty: Difficulty) -> u32 {
    let text = sentence.trim().to_lowercase();
    if text.chars().count() <= 3 {
        return 0;
    }

    let negative = vocabulary::contains_any(&text, NEGATIVE_WORDS);

    let mut score = 1u32;
    if !negative {
        score += 1;
    }
    if vocabulary::contains_any(&text, ACTION_WORDS) {
        score += 1;
    }
    if vocabulary::contains_token(&text, RESPONSIBILITY_TOKENS) {
        score += 1;
    }
    if difficulty == Difficulty::Hard && !negative && score >= 3 {
        score += 1;
    }

    score.min(item_max(difficulty))
}
