// tests/test_utils/mod.rs
//
// Deterministic signal generators and WAV fixtures shared by the
// integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const SAMPLE_RATE: u32 = 44_100;

/// Sine wave at `amplitude` (fraction of full scale), mono
pub fn sine(freq: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin()) as f32)
        .collect()
}

/// Uniform white noise in [-amplitude, amplitude] from a fixed-seed xorshift
pub fn white_noise(amplitude: f64, len: usize, seed: u64) -> Vec<f32> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            (amplitude * (2.0 * unit - 1.0)) as f32
        })
        .collect()
}

/// Interleave two equal-length channels
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    left.iter().zip(right).flat_map(|(&l, &r)| [l, r]).collect()
}

/// Fresh temporary directory for one test, removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("qualitycheck-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).expect("Failed to create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Write interleaved samples as a 16-bit PCM WAV file
pub fn write_wav(path: &Path, samples: &[f32], channels: u16, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        let value = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        writer.write_sample(value).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// One second of mono white noise that passes every default check
pub fn write_clean_wav(path: &Path) {
    write_wav(path, &white_noise(0.5, SAMPLE_RATE as usize, 7), 1, SAMPLE_RATE);
}

/// One second of a 1 kHz tone with no high-frequency content
pub fn write_tone_wav(path: &Path) {
    write_wav(path, &sine(1000.0, 0.5, SAMPLE_RATE, SAMPLE_RATE as usize), 1, SAMPLE_RATE);
}

/// A file with an audio extension that no decoder accepts
pub fn write_corrupt_file(path: &Path) {
    fs::write(path, b"this is not an audio stream at all").expect("Failed to write file");
}

/// Insert a zero-filled RIFF chunk in front of the `data` chunk of a WAV file,
/// the way tag writers place `id3 ` or `LIST` chunks
pub fn insert_riff_chunk(path: &Path, id: &[u8; 4], payload_len: u32) {
    let mut bytes = fs::read(path).expect("Failed to read WAV");
    let data_at = bytes[12..]
        .windows(4)
        .position(|w| w == b"data")
        .map(|pos| pos + 12)
        .expect("WAV has no data chunk");

    let padded = payload_len + payload_len % 2;
    let mut chunk = Vec::with_capacity(8 + padded as usize);
    chunk.extend_from_slice(id);
    chunk.extend_from_slice(&payload_len.to_le_bytes());
    chunk.resize(8 + padded as usize, 0);
    bytes.splice(data_at..data_at, chunk);

    let riff_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) + 8 + padded;
    bytes[4..8].copy_from_slice(&riff_size.to_le_bytes());
    fs::write(path, bytes).expect("Failed to write WAV");
}
