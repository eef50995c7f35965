//! PCM16 packing and base64 transport helpers
//!
//! The realtime speech API exchanges short utterance-length audio clips as
//! base64-encoded PCM16 frames. These are narrow transforms: malformed
//! base64 is a genuine upstream contract violation and propagates as an
//! error; sample conversion clamps out-of-range values instead of failing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// MIME tag for raw PCM transport blobs
pub const PCM_MIME: &str = "audio/pcm";

/// Decode a base64 transport string into bytes.
///
/// # Errors
///
/// Returns an error on malformed base64 input (standard alphabet, padded).
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(input)?)
}

/// Encode bytes as a base64 transport string
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Pack f32 samples in [-1, 1] into little-endian PCM16 bytes.
///
/// Samples are clamped first. Scaling is asymmetric — negatives by 0x8000,
/// non-negatives by 0x7FFF — which is the standard PCM16 convention, not a
/// bug: the i16 range itself is asymmetric. The output is freshly
/// allocated, never aliasing the input's storage.
#[must_use]
pub fn float32_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        #[allow(clippy::cast_possible_truncation)]
        let value = if clamped < 0.0 {
            (clamped * 32768.0) as i16
        } else {
            (clamped * 32767.0) as i16
        };
        bytes.extend_from_slice(&value.to_le_bytes());
    }

    bytes
}

/// A PCM16 byte buffer tagged for transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBlob {
    /// Little-endian PCM16 payload
    pub bytes: Vec<u8>,

    /// Transport MIME type
    pub mime: &'static str,
}

impl PcmBlob {
    /// Pack f32 samples into a transport blob
    #[must_use]
    pub fn from_f32(samples: &[f32]) -> Self {
        Self {
            bytes: float32_to_pcm16(samples),
            mime: PCM_MIME,
        }
    }

    /// Payload size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the payload for the wire
    #[must_use]
    pub fn to_base64(&self) -> String {
        encode_base64(&self.bytes)
    }
}
