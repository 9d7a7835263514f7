// src/core/analysis/loudness.rs
//
// RMS loudness relative to full scale

use crate::config::QualityThresholds;
use crate::core::dsp::{amplitude_to_dbfs, rms};
use crate::core::sample::{AudioSample, FULL_SCALE};

/// Loudness analysis result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoudnessAnalysis {
    /// RMS level in dBFS; `SILENCE_DBFS` for a silent buffer
    pub rms_dbfs: f64,
    pub low_volume: bool,
}

/// Measure loudness of a decoded sample, downmixing stereo to mono first
pub fn analyze_loudness(audio: &AudioSample, thresholds: QualityThresholds) -> LoudnessAnalysis {
    measure_loudness(&audio.to_mono(), thresholds)
}

/// Measure loudness of an already downmixed signal
pub fn measure_loudness(mono: &[f64], thresholds: QualityThresholds) -> LoudnessAnalysis {
    let rms_amplitude = rms(mono);
    let rms_dbfs = amplitude_to_dbfs(rms_amplitude, FULL_SCALE as f64);

    log::debug!("RMS amplitude {:.6} ({:.2} dBFS)", rms_amplitude, rms_dbfs);

    LoudnessAnalysis {
        rms_dbfs,
        low_volume: rms_dbfs < thresholds.min_volume_dbfs,
    }
}
