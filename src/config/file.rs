//! TOML configuration file loading
//!
//! Supports `~/.config/aula/click/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct AulaConfigFile {
    /// Voice selection configuration
    #[serde(default)]
    pub voice: VoiceFileConfig,
}

/// Voice selection configuration
#[derive(Debug, Default, Deserialize)]
pub struct VoiceFileConfig {
    /// Voice identifier for pt-BR segments (e.g. "pt-BR-Wavenet-B")
    pub pt_voice: Option<String>,

    /// Voice identifier for en-US segments (e.g. "en-US-Wavenet-D")
    pub en_voice: Option<String>,

    /// TTS speed multiplier
    pub speed: Option<f32>,

    /// Playback sample rate
    pub sample_rate: Option<u32>,
}

/// Load the TOML config file from the standard path
///
/// Returns `AulaConfigFile::default()` if the file doesn't exist or can't be parsed.
#[must_use]
pub fn load_config_file() -> AulaConfigFile {
    let Some(path) = config_file_path() else {
        return AulaConfigFile::default();
    };

    if !path.exists() {
        return AulaConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                AulaConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            AulaConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/aula/click/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| {
        d.config_dir()
            .join("aula")
            .join("click")
            .join("config.toml")
    })
}
