//! Configuration for the Aula speech core

pub mod file;

use file::{AulaConfigFile, load_config_file};

/// Speech core configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Voice selection and playback settings
    pub voice: VoiceConfig,
}

/// Voice selection configuration
///
/// Maps each supported lesson language to a synthesis voice. Segments
/// produced by the classifier are routed through these (see
/// [`crate::speech::VoiceRouter`]).
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Voice identifier for pt-BR segments
    pub pt_voice: String,

    /// Voice identifier for en-US segments
    pub en_voice: String,

    /// TTS speed multiplier (0.25 to 4.0)
    pub speed: f32,

    /// Sample rate for synthesized audio playback
    pub sample_rate: u32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            pt_voice: "pt-BR-Standard-A".to_string(),
            en_voice: "en-US-Standard-A".to_string(),
            speed: 1.0,
            sample_rate: 24000,
        }
    }
}

impl Config {
    /// Load configuration: defaults overlaid with the user's config file.
    ///
    /// A missing or unparseable file falls back to defaults (logged, not
    /// an error), so lesson playback never fails on bad local config.
    #[must_use]
    pub fn load() -> Self {
        Self::default().overlay(load_config_file())
    }

    /// Apply a partial file overlay on top of this configuration
    #[must_use]
    pub fn overlay(mut self, fc: AulaConfigFile) -> Self {
        if let Some(pt_voice) = fc.voice.pt_voice {
            self.voice.pt_voice = pt_voice;
        }
        if let Some(en_voice) = fc.voice.en_voice {
            self.voice.en_voice = en_voice;
        }
        if let Some(speed) = fc.voice.speed {
            self.voice.speed = speed.clamp(0.25, 4.0);
        }
        if let Some(sample_rate) = fc.voice.sample_rate {
            self.voice.sample_rate = sample_rate;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_a_voice_per_language() {
        let config = Config::default();
        assert!(config.voice.pt_voice.starts_with("pt-BR"));
        assert!(config.voice.en_voice.starts_with("en-US"));
        assert!((config.voice.speed - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn overlay_replaces_only_present_fields() {
        let fc: AulaConfigFile = toml::from_str(
            r#"
            [voice]
            pt_voice = "pt-BR-Wavenet-B"
            speed = 1.5
            "#,
        )
        .expect("valid toml");

        let config = Config::default().overlay(fc);
        assert_eq!(config.voice.pt_voice, "pt-BR-Wavenet-B");
        assert_eq!(config.voice.en_voice, "en-US-Standard-A");
        assert!((config.voice.speed - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.voice.sample_rate, 24000);
    }

    #[test]
    fn overlay_clamps_speed() {
        let fc: AulaConfigFile = toml::from_str("[voice]\nspeed = 99.0")
            .expect("valid toml");
        let config = Config::default().overlay(fc);
        assert!((config.voice.speed - 4.0).abs() < f32::EPSILON);
    }
}
