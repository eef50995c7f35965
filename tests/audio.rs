//! Audio codec integration tests
//!
//! Round-trips the transport path used with the realtime speech API:
//! f32 samples → PCM16 → base64 → bytes → decoded samples.

use std::io::Cursor;

use aula_speech::{
    PcmBlob, decode_audio, decode_base64, encode_base64, float32_to_pcm16,
};

/// Generate sine wave audio samples
fn generate_sine_samples(frequency: f32, duration_secs: f32, sample_rate: u32) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.5 * (2.0 * std::f32::consts::PI * frequency * t).sin()
        })
        .collect()
}

#[test]
fn test_pcm16_round_trip_within_one_unit() {
    let samples = generate_sine_samples(440.0, 0.05, 16000);
    let bytes = float32_to_pcm16(&samples);
    assert_eq!(bytes.len(), samples.len() * 2);

    for (i, &sample) in samples.iter().enumerate() {
        let value = i16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]);
        let expected = if sample < 0.0 {
            f64::from(sample) * 32768.0
        } else {
            f64::from(sample) * 32767.0
        };
        assert!(
            (f64::from(value) - expected).abs() <= 1.0,
            "sample {i} out of tolerance"
        );
    }
}

#[test]
fn test_base64_round_trip_on_audio_sized_buffers() {
    // A few hundred KB, the size of a short utterance clip
    let bytes: Vec<u8> = (0..300_000u32).map(|i| (i % 251) as u8).collect();

    let encoded = encode_base64(&bytes);
    let decoded = decode_base64(&encoded).expect("valid base64");
    assert_eq!(decoded, bytes);
}

#[test]
fn test_malformed_base64_propagates_error() {
    assert!(decode_base64("@@not-base64@@").is_err());
}

#[test]
fn test_pcm_blob_transport_path() {
    let samples = generate_sine_samples(220.0, 0.01, 16000);
    let blob = PcmBlob::from_f32(&samples);

    assert_eq!(blob.mime, "audio/pcm");
    assert_eq!(blob.len(), samples.len() * 2);

    // Wire round trip
    let decoded = decode_base64(&blob.to_base64()).expect("valid base64");
    assert_eq!(decoded, blob.bytes);
}

#[tokio::test]
async fn test_decode_wav_utterance() {
    let samples = generate_sine_samples(440.0, 0.1, 24000);

    // Encode a 16-bit mono WAV in memory
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 24000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("wav writer");
        for &sample in &samples {
            writer
                .write_sample((sample * 32767.0) as i16)
                .expect("write sample");
        }
        writer.finalize().expect("finalize");
    }

    let buffer = decode_audio(cursor.into_inner()).await.expect("decodes");
    assert_eq!(buffer.sample_rate, 24000);
    assert_eq!(buffer.channels, 1);
    assert_eq!(buffer.samples.len(), samples.len());
    assert_eq!(buffer.duration_ms(), 100);

    for (decoded, expected) in buffer.samples.iter().zip(&samples) {
        assert!((decoded - expected).abs() < 0.001);
    }
}

#[tokio::test]
async fn test_decode_rejects_non_audio_bytes() {
    let result = decode_audio(b"definitely not audio data".to_vec()).await;
    assert!(result.is_err());
}
