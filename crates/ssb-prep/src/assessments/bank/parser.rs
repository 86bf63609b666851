use std::io::Read;

use serde::Deserialize;

use crate::assessments::support::Difficulty;

use super::{BankImportError, PracticePrompt, PromptKind};

#[derive(Debug, Deserialize)]
struct PromptRow {
    kind: String,
    key: String,
    prompt: String,
    #[serde(default)]
    theme: String,
    #[serde(default)]
    difficulty: String,
}

pub(super) fn parse_rows<R: Read>(reader: R) -> Result<Vec<PracticePrompt>, BankImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut prompts = Vec::new();
    for row in csv_reader.deserialize::<PromptRow>() {
        let row = row?;
        prompts.push(PracticePrompt {
            key: row.key,
            kind: parse_kind(&row.kind)?,
            prompt: row.prompt,
            theme: normalize_theme(&row.theme),
            difficulty: parse_difficulty(&row.difficulty),
        });
    }

    Ok(prompts)
}

fn parse_kind(raw: &str) -> Result<PromptKind, BankImportError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "situational" | "srt" => Ok(PromptKind::Situational),
        "narrative" | "tat" => Ok(PromptKind::Narrative),
        "word_association" | "word-association" | "wat" => Ok(PromptKind::WordAssociation),
        other => Err(BankImportError::UnknownKind(other.to_string())),
    }
}

/// Unknown or missing difficulty tags fall back to medium, matching the
/// intake boundary's behavior for submissions.
fn parse_difficulty(raw: &str) -> Difficulty {
    match raw.trim().to_ascii_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

fn normalize_theme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "General".to_string()
    } else {
        trimmed.to_string()
    }
}
