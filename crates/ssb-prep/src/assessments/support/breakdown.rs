use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme label applied when an item carries none.
pub const DEFAULT_THEME: &str = "General";

/// Per-theme slice of a battery report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBreakdown {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
}

/// Accumulates per-item scores grouped by theme label. `BTreeMap` keeps the
/// rendered breakdown order stable across calls.
#[derive(Debug, Default)]
pub(crate) struct ThemeAccumulator {
    totals: BTreeMap<String, (f64, f64)>,
}

impl ThemeAccumulator {
    pub(crate) fn record(&mut self, theme: Option<&str>, score: f64, max_score: f64) {
        let label = match theme.map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => DEFAULT_THEME,
        };
        let entry = self.totals.entry(label.to_string()).or_insert((0.0, 0.0));
        entry.0 += score;
        entry.1 += max_score;
    }

    pub(crate) fn finish(self) -> BTreeMap<String, ThemeBreakdown> {
        self.totals
            .into_iter()
            .map(|(theme, (score, max_score))| (theme, breakdown(score, max_score)))
            .collect()
    }

    /// Variant used by the narrative battery, where weighted totals are
    /// rounded to integers in the returned report.
    pub(crate) fn finish_rounded(self) -> BTreeMap<String, ThemeBreakdown> {
        self.totals
            .into_iter()
            .map(|(theme, (score, max_score))| {
                let rounded = breakdown(score.round(), max_score.round());
                (
                    theme,
                    ThemeBreakdown {
                        percentage: rounded.percentage.round(),
                        ..rounded
                    },
                )
            })
            .collect()
    }
}

fn breakdown(score: f64, max_score: f64) -> ThemeBreakdown {
    let percentage = if max_score > 0.0 {
        score / max_score * 100.0
    } else {
        0.0
    };
    ThemeBreakdown {
        score,
        max_score,
        percentage,
    }
}
