//! Thematic-story scoring.
//!
//! Stories written against an ambiguous picture prompt are scored on seven
//! sub-signals: hero identification, problem recognition, planning,
//! leadership, positive outcome, emotional stability, and realism. The raw
//! item score (max 14) is then weighted by the prompt's difficulty
//! multiplier, which applies to both score and maximum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::support::breakdown::{ThemeAccumulator, ThemeBreakdown};
use super::support::risk::{RiskLevel, TEXT_BATTERY_THRESHOLDS};
use super::support::vocabulary;
use super::support::Difficulty;

/// Raw per-story maximum before the difficulty multiplier.
pub const ITEM_MAX_RAW_SCORE: u32 = 14;

const SUBSCORE_CAP: usize = 2;

/// Stories shorter than this many characters score zero outright.
const MIN_STORY_CHARS: usize = 30;

/// Stories shorter than this many words cannot earn full stability/realism
/// marks, so a one-liner cannot game the keyword check.
const SHORT_STORY_WORD_FLOOR: usize = 30;

const HERO_WORDS: &[&str] = &[
    "officer",
    "soldier",
    "cadet",
    "leader",
    "captain",
    "young man",
    "young woman",
    "boy",
    "girl",
    "student",
    "villager",
];

const PROBLEM_WORDS: &[&str] = &[
    "problem",
    "crisis",
    "accident",
    "flood",
    "fire",
    "injured",
    "emergency",
    "danger",
    "stranded",
    "shortage",
];

const PLANNING_WORDS: &[&str] = &[
    "plan",
    "organize",
    "organise",
    "arrange",
    "decide",
    "prepare",
    "first",
    "then",
    "finally",
    "steps",
];

const LEADERSHIP_WORDS: &[&str] = &[
    "led",
    "guide",
    "instruct",
    "direct",
    "motivate",
    "team",
    "together",
    "coordinate",
    "volunteers",
    "assigned",
];

const OUTCOME_WORDS: &[&str] = &[
    "success",
    "safely",
    "saved",
    "rescued",
    "resolved",
    "completed",
    "achieved",
    "recovered",
    "normal",
    "appreciated",
];

const PANIC_WORDS: &[&str] = &[
    "panic",
    "cried",
    "fear",
    "terrified",
    "hopeless",
    "gave up",
    "helpless",
];

const FANTASY_WORDS: &[&str] = &[
    "magic",
    "superpower",
    "ghost",
    "alien",
    "miracle",
    "dragon",
    "teleport",
    "suddenly appeared",
    "wizard",
];

/// One picture prompt together with the candidate's story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeItem {
    pub picture_id: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub story: String,
}

/// Aggregated outcome for one narrative attempt. Totals are
/// multiplier-weighted sums rounded to integers; the percentage is rounded
/// as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeReport {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk: RiskLevel,
    pub themes: BTreeMap<String, ThemeBreakdown>,
}

const fn multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 1.0,
        Difficulty::Medium => 1.2,
        Difficulty::Hard => 1.5,
    }
}

/// Score a full sequence of stories.
pub fn evaluate(items: &[NarrativeItem]) -> NarrativeReport {
    let mut total = 0.0_f64;
    let mut max = 0.0_f64;
    let mut themes = ThemeAccumulator::default();

    for item in items {
        let raw = score_story(&item.story);
        let weight = multiplier(item.difficulty);
        let weighted = f64::from(raw) * weight;
        let weighted_max = f64::from(ITEM_MAX_RAW_SCORE) * weight;
        total += weighted;
        max += weighted_max;
        themes.record(item.theme.as_deref(), weighted, weighted_max);
    }

    let percentage = if max > 0.0 {
        (total / max * 100.0).round()
    } else {
        0.0
    };

    NarrativeReport {
        total_score: total.round() as u32,
        max_score: max.round() as u32,
        percentage,
        risk: TEXT_BATTERY_THRESHOLDS.classify(percentage),
        themes: themes.finish_rounded(),
    }
}

fn score_story(story: &str) -> u32 {
    let text = story.trim().to_lowercase();
    if text.chars().count() <= MIN_STORY_CHARS {
        return 0;
    }

    let capped = |list: &[&str]| vocabulary::match_count(&text, list).min(SUBSCORE_CAP) as u32;

    let hero = capped(HERO_WORDS);
    let problem = capped(PROBLEM_WORDS);
    let planning = capped(PLANNING_WORDS);
    let leadership = capped(LEADERSHIP_WORDS);
    let outcome = capped(OUTCOME_WORDS);

    let mut stability = composure_band(vocabulary::match_count(&text, PANIC_WORDS));
    let mut realism = composure_band(vocabulary::match_count(&text, FANTASY_WORDS));
    if text.split_whitespace().count() < SHORT_STORY_WORD_FLOOR {
        stability = stability.min(1);
        realism = realism.min(1);
    }

    hero + problem + planning + leadership + outcome + stability + realism
}

/// 2 for zero matches, 1 for exactly one, 0 for two or more.
const fn composure_band(matches: usize) -> u32 {
    match matches {
        0 => 2,
        1 => 1,
        _ => 0,
    }
}
