//! Audio byte/sample codecs
//!
//! Conversions at the boundary with the realtime speech API: base64
//! transport strings, raw byte buffers, PCM16 frames, and decoded sample
//! buffers for playback.

mod codec;
mod decode;

pub use codec::{PCM_MIME, PcmBlob, decode_base64, encode_base64, float32_to_pcm16};
pub use decode::{AudioBuffer, decode_audio};
