//! Error types for the Aula speech core

use thiserror::Error;

/// Result type alias for Aula speech operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the speech core
///
/// The fail-soft surfaces (language detection, TTS sanitization, exercise
/// parsing) never produce these; they degrade to `false`/empty instead.
/// Errors are reserved for genuine contract violations at the audio and
/// config boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Audio decode/encode error
    #[error("audio error: {0}")]
    Audio(String),

    /// Exercise block error
    #[error("exercise error: {0}")]
    Exercise(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Base64 transport decoding error
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}
