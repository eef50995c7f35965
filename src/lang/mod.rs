//! Language classification and utterance segmentation
//!
//! Decides whether lesson text is Brazilian Portuguese or English so each
//! run of text can be synthesized with a matching voice. Heuristic by
//! design: explicit phrase patterns for short text, word-frequency scoring
//! over a curated lexicon for longer text. No external calls; deterministic
//! given the static tables in [`lexicon`].

mod detect;
mod lexicon;
mod segment;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use detect::{detect_portuguese, has_portuguese_mixed};
pub use segment::{Segment, segment_utterances};

/// Spoken language of a text segment, used to select a synthesis voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Brazilian Portuguese
    #[serde(rename = "pt-BR")]
    PtBr,
    /// American English
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// BCP-47 tag understood by speech-synthesis APIs
    #[must_use]
    pub const fn as_bcp47(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_bcp47())
    }
}
