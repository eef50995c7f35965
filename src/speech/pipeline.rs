//! End-to-end speech preparation
//!
//! The playback entry point: raw lesson content in, ordered
//! language-labeled utterance segments out.

use crate::lang::{Segment, segment_utterances};

use super::sanitize::clean_text_for_tts;

/// Prepare raw lesson content for synthesis.
///
/// Sanitizes the content (markup, emoji, TTS-hostile punctuation stripped)
/// and segments the result by language. Content that sanitizes to nothing
/// yields an empty vec, which the player treats as "nothing to speak".
#[must_use]
pub fn prepare_utterances(raw: &str) -> Vec<Segment> {
    let cleaned = clean_text_for_tts(raw);
    if cleaned.is_empty() {
        tracing::debug!("no speakable text after sanitization");
        return Vec::new();
    }

    let segments = segment_utterances(&cleaned);
    tracing::debug!(segments = segments.len(), "prepared utterances");
    segments
}
