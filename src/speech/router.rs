//! Per-segment voice routing
//!
//! The player synthesizes one segment at a time; this maps each segment's
//! language to the configured synthesis voice.

use crate::config::VoiceConfig;
use crate::lang::{Language, Segment};

/// Maps segment languages to synthesis voices
#[derive(Debug, Clone)]
pub struct VoiceRouter {
    pt_voice: String,
    en_voice: String,
}

/// A segment paired with the voice that should speak it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedUtterance<'a> {
    /// Voice identifier for the synthesis request
    pub voice: &'a str,

    /// Text to synthesize
    pub text: &'a str,

    /// Language tag sent alongside the voice
    pub language: Language,
}

impl VoiceRouter {
    /// Build a router from voice configuration
    #[must_use]
    pub fn new(config: &VoiceConfig) -> Self {
        Self {
            pt_voice: config.pt_voice.clone(),
            en_voice: config.en_voice.clone(),
        }
    }

    /// Voice identifier for a segment language
    #[must_use]
    pub fn voice_for(&self, language: Language) -> &str {
        match language {
            Language::PtBr => &self.pt_voice,
            Language::EnUs => &self.en_voice,
        }
    }

    /// Pair each segment with its voice, preserving playback order
    #[must_use]
    pub fn route<'a>(&'a self, segments: &'a [Segment]) -> Vec<RoutedUtterance<'a>> {
        segments
            .iter()
            .map(|segment| RoutedUtterance {
                voice: self.voice_for(segment.language),
                text: &segment.text,
                language: segment.language,
            })
            .collect()
    }
}
