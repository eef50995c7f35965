//! Aula Speech - Lesson text and speech processing core for Aula Click
//!
//! This library provides the text and audio plumbing behind lesson audio
//! playback and the speech tutor:
//! - Language classification (Brazilian Portuguese vs English) and
//!   utterance segmentation for bilingual lesson text
//! - TTS input sanitization (HTML/Markdown/emoji stripping)
//! - Exercise block extraction from AI-generated lesson HTML
//! - Audio byte/sample codecs at the speech-API boundary
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Lesson content                       │
//! │   HTML + Markdown + emoji (AI-generated)            │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │              speech::sanitize                        │
//! │   strip markup → plain speakable text               │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │          lang::segment + speech::router              │
//! │   label pt-BR / en-US runs → per-language voice     │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                audio codecs                          │
//! │   base64 ⇄ bytes ⇄ PCM16 ⇄ decoded samples          │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod lang;
pub mod lessons;
pub mod speech;
pub mod telemetry;

pub use audio::{
    AudioBuffer, PcmBlob, decode_audio, decode_base64, encode_base64, float32_to_pcm16,
};
pub use config::{Config, VoiceConfig};
pub use error::{Error, Result};
pub use lang::{Language, Segment, detect_portuguese, has_portuguese_mixed, segment_utterances};
pub use lessons::{
    Exercise, ExerciseKind, clean_content_from_exercises, parse_exercises_from_content,
};
pub use speech::{RoutedUtterance, VoiceRouter, clean_text_for_tts, prepare_utterances};
