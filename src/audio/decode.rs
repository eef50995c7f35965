//! Audio container decoding for playback
//!
//! The speech API returns synthesized audio as WAV or MP3; playback needs
//! f32 samples. Container decode is CPU-bound, so it runs on the blocking
//! pool rather than the async executor.

use std::io::Cursor;

use crate::error::{Error, Result};

/// Decoded audio ready for the playback pipeline
///
/// Samples are mono f32 in [-1, 1]; stereo sources are collapsed by
/// channel averaging.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Mono samples
    pub samples: Vec<f32>,

    /// Source sample rate
    pub sample_rate: u32,

    /// Channel count after decode (always 1)
    pub channels: u16,
}

impl AudioBuffer {
    /// Duration in milliseconds
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / u64::from(self.sample_rate)
    }
}

/// Decode WAV or MP3 bytes into an [`AudioBuffer`].
///
/// The container is sniffed from the leading bytes (RIFF/WAVE header means
/// WAV, anything else is tried as MP3). The input is moved into the
/// blocking task, so the decoder never aliases caller-held storage.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable audio container.
pub async fn decode_audio(bytes: Vec<u8>) -> Result<AudioBuffer> {
    tokio::task::spawn_blocking(move || decode_container(&bytes))
        .await
        .map_err(|e| Error::Audio(format!("decode task failed: {e}")))?
}

/// Sniff the container format and decode
fn decode_container(bytes: &[u8]) -> Result<AudioBuffer> {
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE" {
        decode_wav(bytes)
    } else {
        decode_mp3(bytes)
    }
}

/// Decode WAV bytes to mono f32 samples
fn decode_wav(bytes: &[u8]) -> Result<AudioBuffer> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| Error::Audio(format!("WAV decode error: {e}")))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Audio(format!("WAV decode error: {e}")))?,
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| f32::from(v) / 32768.0))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Audio(format!("WAV decode error: {e}")))?,
        (format, bits) => {
            return Err(Error::Audio(format!(
                "unsupported WAV format: {bits}-bit {format:?}"
            )));
        }
    };

    let samples = collapse_to_mono(&samples, spec.channels);

    tracing::debug!(
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        source_channels = spec.channels,
        "decoded WAV audio"
    );

    Ok(AudioBuffer {
        samples,
        sample_rate: spec.sample_rate,
        channels: 1,
    })
}

/// Decode MP3 bytes to mono f32 samples
fn decode_mp3(bytes: &[u8]) -> Result<AudioBuffer> {
    let mut decoder = minimp3::Decoder::new(Cursor::new(bytes));
    let mut samples = Vec::new();
    let mut sample_rate = 0u32;

    loop {
        match decoder.next_frame() {
            Ok(frame) => {
                #[allow(clippy::cast_sign_loss)]
                {
                    sample_rate = frame.sample_rate as u32;
                }

                let frame_samples: Vec<f32> =
                    frame.data.iter().map(|&s| f32::from(s) / 32768.0).collect();

                #[allow(clippy::cast_possible_truncation)]
                samples.extend(collapse_to_mono(&frame_samples, frame.channels as u16));
            }
            Err(minimp3::Error::Eof) => break,
            Err(e) => return Err(Error::Audio(format!("MP3 decode error: {e}"))),
        }
    }

    if samples.is_empty() {
        return Err(Error::Audio("no decodable audio frames".to_string()));
    }

    tracing::debug!(samples = samples.len(), sample_rate, "decoded MP3 audio");

    Ok(AudioBuffer {
        samples,
        sample_rate,
        channels: 1,
    })
}

/// Average interleaved channels down to mono
fn collapse_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let channels = usize::from(channels);
    samples
        .chunks(channels)
        .map(|frame| {
            #[allow(clippy::cast_precision_loss)]
            let width = frame.len() as f32;
            frame.iter().sum::<f32>() / width
        })
        .collect()
}
