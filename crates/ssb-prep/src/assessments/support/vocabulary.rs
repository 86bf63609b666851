//! Vocabulary matching shared by the text evaluators.
//!
//! Two match modes exist and are not interchangeable: plain substring
//! containment for most lists, and whole-token matching for the
//! responsibility checks (a one-letter entry like "i" must never match
//! inside another word). Callers pass text that is already trimmed and
//! lower-cased.

/// True when any vocabulary entry occurs in the text as a substring.
pub(crate) fn contains_any(text: &str, vocabulary: &[&str]) -> bool {
    vocabulary.iter().any(|entry| text.contains(entry))
}

/// Number of vocabulary entries that occur in the text as substrings.
pub(crate) fn match_count(text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|entry| text.contains(*entry)).count()
}

/// True when any vocabulary entry occurs as a whole-token sequence.
///
/// Text and entries are split on non-alphanumeric characters; multi-word
/// entries match only as consecutive tokens.
pub(crate) fn contains_token(text: &str, vocabulary: &[&str]) -> bool {
    let tokens: Vec<&str> = tokenize(text);
    vocabulary.iter().any(|entry| {
        let needle = tokenize(entry);
        !needle.is_empty()
            && tokens
                .windows(needle.len())
                .any(|window| window == needle.as_slice())
    })
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}
