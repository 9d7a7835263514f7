// src/core/sample.rs
//
// Decoded PCM buffer handed to the analyzers.

use crate::error::MalformedInput;

/// Amplitude corresponding to 0 dBFS
pub const FULL_SCALE: f32 = 1.0;

/// Decoded audio signal
///
/// Samples are interleaved when stereo and normalized to
/// [-`FULL_SCALE`, `FULL_SCALE`]. The buffer can only be built through
/// [`AudioSample::new`], which guarantees a positive sample rate, one or two
/// channels and a non-empty buffer of whole frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSample {
    sample_rate: u32,
    channels: usize,
    samples: Vec<f32>,
}

impl AudioSample {
    pub fn new(sample_rate: u32, channels: usize, samples: Vec<f32>) -> Result<Self, MalformedInput> {
        if sample_rate == 0 {
            return Err(MalformedInput::InvalidSampleRate);
        }
        if !(1..=2).contains(&channels) {
            return Err(MalformedInput::UnsupportedChannelCount(channels));
        }
        if samples.is_empty() {
            return Err(MalformedInput::EmptyBuffer);
        }
        if samples.len() % channels != 0 {
            return Err(MalformedInput::RaggedBuffer {
                len: samples.len(),
                channels,
            });
        }

        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Average all channels of each frame into a single mono sequence
    pub fn to_mono(&self) -> Vec<f64> {
        if self.channels == 1 {
            return self.samples.iter().map(|&s| s as f64).collect();
        }

        self.samples
            .chunks_exact(self.channels)
            .map(|frame| frame.iter().map(|&s| s as f64).sum::<f64>() / self.channels as f64)
            .collect()
    }
}
