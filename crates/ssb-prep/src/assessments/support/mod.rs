//! Shared building blocks for the scoring engines.

pub mod breakdown;
pub mod risk;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

/// Difficulty tag carried by narrative and word-association items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
