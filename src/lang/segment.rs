//! Utterance segmentation for bilingual lesson text
//!
//! Splits text into sentences, labels each with a language, and merges
//! adjacent same-language sentences so the player switches voices as few
//! times as possible. Ordering follows source-text position.

use serde::{Deserialize, Serialize};

use super::{Language, detect_portuguese};

/// A contiguous run of text to be synthesized with one voice
///
/// Transient: produced per playback request and consumed in order by the
/// sequential speech player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment text (never empty)
    pub text: String,

    /// Language the segment should be spoken in
    pub language: Language,
}

/// Split `text` into ordered, language-labeled utterance segments.
///
/// Sentences are detected on terminal punctuation (`.`, `!`, `?`) with two
/// guards: a period glued to a following alphanumeric (decimals, domains,
/// "e.g.") and a period followed by a lowercase continuation are not
/// boundaries. Each sentence is
/// classified with [`detect_portuguese`]; adjacent same-language sentences
/// merge into a single segment.
///
/// Empty input yields an empty vec. Never panics.
#[must_use]
pub fn segment_utterances(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for sentence in split_sentences(text) {
        let language = if detect_portuguese(&sentence) {
            Language::PtBr
        } else {
            Language::EnUs
        };

        match segments.last_mut() {
            Some(prev) if prev.language == language => {
                prev.text.push(' ');
                prev.text.push_str(&sentence);
            }
            _ => segments.push(Segment {
                text: sentence,
                language,
            }),
        }
    }

    segments
}

/// Split text into trimmed, non-empty sentences
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if matches!(ch, '.' | '!' | '?') && is_sentence_boundary(&chars, i) {
            // Consume trailing whitespace so the next sentence starts clean
            while chars.get(i + 1).is_some_and(|c| c.is_whitespace()) {
                i += 1;
            }

            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }

        i += 1;
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// Decide whether the terminal-punctuation char at `i` ends a sentence
fn is_sentence_boundary(chars: &[char], i: usize) -> bool {
    if chars[i] != '.' {
        return true;
    }

    match chars.get(i + 1) {
        // "3.14", "e.g.", "aulaclick.app" — word-internal period
        Some(next) if next.is_alphanumeric() => false,
        // ". word" with a lowercase continuation — likely an abbreviation
        Some(next) if next.is_whitespace() => {
            !chars.get(i + 2).is_some_and(|c| c.is_lowercase())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(segment_utterances("").is_empty());
        assert!(segment_utterances("   ").is_empty());
    }

    #[test]
    fn single_language_is_one_segment() {
        let segments = segment_utterances("Hello there. How are you today?");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].language, Language::EnUs);
        assert_eq!(segments[0].text, "Hello there. How are you today?");
    }

    #[test]
    fn bilingual_text_alternates_segments() {
        let segments =
            segment_utterances("Muito bem! Por favor, repita a frase. Now listen carefully.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].language, Language::PtBr);
        assert_eq!(segments[1].language, Language::EnUs);
        assert_eq!(segments[1].text, "Now listen carefully.");
    }

    #[test]
    fn order_follows_source_position() {
        let segments = segment_utterances("Good morning! Obrigado pela aula de hoje.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].language, Language::EnUs);
        assert_eq!(segments[1].language, Language::PtBr);
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        let sentences = split_sentences("The score was 3.5 points. Well done!");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The score was 3.5 points.");
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        let sentences = split_sentences("He paused. then continued. Done.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "He paused. then continued.");
    }

    #[test]
    fn word_internal_period_is_not_a_boundary() {
        let sentences = split_sentences("Use e.g. this one. Done.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Use e.g. this one.");
    }

    #[test]
    fn trailing_text_without_punctuation_is_kept() {
        let sentences = split_sentences("First sentence. and then a tail");
        assert!(sentences.last().is_some_and(|s| s.contains("tail")));
    }

    #[test]
    fn segment_text_is_never_empty() {
        let segments = segment_utterances("... !!! ???");
        assert!(segments.iter().all(|s| !s.text.is_empty()));
    }
}
