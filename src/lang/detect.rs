//! Portuguese/English text classification

use super::lexicon::{ENGLISH_STUDY_TERMS, PHRASE_PATTERNS, PORTUGUESE_WORDS, TOKEN_PUNCTUATION};

/// Minimum share of tokens that must be Portuguese for a positive result
const WORD_MATCH_RATIO_PERCENT: usize = 30;

/// Decide whether `text` is predominantly Brazilian Portuguese.
///
/// Two-stage heuristic:
/// 1. A fixed list of high-signal phrase patterns (polite expressions,
///    pronoun+verb pairs, question openers, possessives, intensifiers).
///    Any match short-circuits to `true`.
/// 2. Word-frequency scoring: tokens (punctuation-stripped) are counted
///    against a curated Portuguese lexicon; at least 30% of tokens must
///    match, with a floor of one word for non-empty input.
///
/// Empty or whitespace-only input returns `false`. Never panics.
#[must_use]
pub fn detect_portuguese(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }

    if PHRASE_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        return true;
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let matches = tokens
        .iter()
        .map(|t| t.trim_matches(|c| TOKEN_PUNCTUATION.contains(&c)))
        .filter(|t| !t.is_empty() && PORTUGUESE_WORDS.contains(t))
        .count();

    let threshold = (tokens.len() * WORD_MATCH_RATIO_PERCENT / 100).max(1);
    matches >= threshold
}

/// Decide whether `text` is mixed-language lesson text.
///
/// True only when the text is Portuguese AND it either mentions an English
/// pedagogical term (a pt-BR learner discussing English grammar) or runs
/// longer than two words. Pure one/two-word Portuguese is treated as
/// monolingual.
#[must_use]
pub fn has_portuguese_mixed(text: &str) -> bool {
    if !detect_portuguese(text) {
        return false;
    }

    ENGLISH_STUDY_TERMS.is_match(text) || text.split_whitespace().count() > 2
}
