//! Practice question bank.
//!
//! Holds the prompts the practice modules draw from: situational
//! scenarios, TAT picture captions, and WAT stimulus words. A built-in
//! standard catalog ships with the crate; coaching partners can supply
//! their own bank as CSV (`kind,key,prompt,theme,difficulty`).

mod parser;

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::support::Difficulty;

/// Which battery a prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Situational,
    Narrative,
    WordAssociation,
}

impl PromptKind {
    pub const fn label(self) -> &'static str {
        match self {
            PromptKind::Situational => "situational",
            PromptKind::Narrative => "narrative",
            PromptKind::WordAssociation => "word_association",
        }
    }
}

/// One entry in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticePrompt {
    pub key: String,
    pub kind: PromptKind,
    pub prompt: String,
    pub theme: String,
    pub difficulty: Difficulty,
}

/// Error raised while importing a partner-supplied bank.
#[derive(Debug, thiserror::Error)]
pub enum BankImportError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown prompt kind '{0}'")]
    UnknownKind(String),
}

/// In-memory prompt catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    prompts: Vec<PracticePrompt>,
}

impl QuestionBank {
    /// The built-in catalog used when no partner bank is supplied.
    pub fn standard() -> Self {
        let prompt = |kind, key: &str, text: &str, theme: &str, difficulty| PracticePrompt {
            key: key.to_string(),
            kind,
            prompt: text.to_string(),
            theme: theme.to_string(),
            difficulty,
        };

        Self {
            prompts: vec![
                prompt(
                    PromptKind::Situational,
                    "srt-001",
                    "You see a crowd gathering around a road accident on your way to an exam.",
                    "Responsibility",
                    Difficulty::Medium,
                ),
                prompt(
                    PromptKind::Situational,
                    "srt-002",
                    "Your trek group loses the trail at dusk and two members start arguing.",
                    "Leadership",
                    Difficulty::Hard,
                ),
                prompt(
                    PromptKind::Situational,
                    "srt-003",
                    "A junior on your team is blamed for a mistake you know was yours.",
                    "Integrity",
                    Difficulty::Easy,
                ),
                prompt(
                    PromptKind::Narrative,
                    "tat-001",
                    "A figure stands at a riverbank at dawn, boats in the distance.",
                    "Crisis Response",
                    Difficulty::Medium,
                ),
                prompt(
                    PromptKind::Narrative,
                    "tat-002",
                    "Two people study a map beside a stalled vehicle on an empty road.",
                    "Planning",
                    Difficulty::Hard,
                ),
                prompt(
                    PromptKind::WordAssociation,
                    "wat-001",
                    "duty",
                    "Character",
                    Difficulty::Medium,
                ),
                prompt(
                    PromptKind::WordAssociation,
                    "wat-002",
                    "defeat",
                    "Resilience",
                    Difficulty::Hard,
                ),
                prompt(
                    PromptKind::WordAssociation,
                    "wat-003",
                    "team",
                    "Cooperation",
                    Difficulty::Easy,
                ),
            ],
        }
    }

    /// Import a bank from a partner CSV export on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, BankImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Import a bank from any CSV reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, BankImportError> {
        Ok(Self {
            prompts: parser::parse_rows(reader)?,
        })
    }

    pub fn prompts(&self) -> &[PracticePrompt] {
        &self.prompts
    }

    pub fn of_kind(&self, kind: PromptKind) -> Vec<&PracticePrompt> {
        self.prompts
            .iter()
            .filter(|prompt| prompt.kind == kind)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_all_three_batteries() {
        let bank = QuestionBank::standard();
        assert!(!bank.of_kind(PromptKind::Situational).is_empty());
        assert!(!bank.of_kind(PromptKind::Narrative).is_empty());
        assert!(!bank.of_kind(PromptKind::WordAssociation).is_empty());
    }

    #[test]
    fn csv_import_maps_kinds_and_difficulties() {
        let csv = "kind,key,prompt,theme,difficulty\n\
                   srt,custom-1,A bridge is washed out before a convoy.,Crisis,hard\n\
                   wat,custom-2,courage,Character,easy\n";
        let bank = QuestionBank::from_csv_reader(csv.as_bytes()).expect("bank imports");

        assert_eq!(bank.prompts().len(), 2);
        assert_eq!(bank.prompts()[0].kind, PromptKind::Situational);
        assert_eq!(bank.prompts()[0].difficulty, Difficulty::Hard);
        assert_eq!(bank.prompts()[1].kind, PromptKind::WordAssociation);
        assert_eq!(bank.prompts()[1].difficulty, Difficulty::Easy);
    }

    #[test]
    fn csv_import_defaults_blank_theme_and_difficulty() {
        let csv = "kind,key,prompt,theme,difficulty\n\
                   tat,custom-3,A ladder leans against a silent house.,,\n";
        let bank = QuestionBank::from_csv_reader(csv.as_bytes()).expect("bank imports");

        assert_eq!(bank.prompts()[0].theme, "General");
        assert_eq!(bank.prompts()[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn csv_import_rejects_unknown_kind() {
        let csv = "kind,key,prompt,theme,difficulty\n\
                   interview,custom-4,Tell me about yourself.,General,medium\n";
        let result = QuestionBank::from_csv_reader(csv.as_bytes());
        assert!(matches!(result, Err(BankImportError::UnknownKind(kind)) if kind == "interview"));
    }
}
