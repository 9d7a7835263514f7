// src/core/analysis/spectral.rs
//
// High-frequency energy ratio. Lossy encoders and upsampled sources carry
// little or no energy above roughly 14-16 kHz, while genuine high-bitrate
// material usually keeps measurable content there.

use realfft::FftError;

use crate::config::QualityThresholds;
use crate::core::dsp::{bin_frequency, magnitude_spectrum};
use crate::core::sample::AudioSample;

/// Spectral analysis result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralAnalysis {
    /// Sum of bin magnitudes above `min_high_freq_hz`
    pub high_freq_energy: f64,
    /// Sum of bin magnitudes over the non-negative half
    pub total_energy: f64,
    /// `high_freq_energy / total_energy`, always within [0, 1]
    pub high_freq_ratio: f64,
    pub bad_spectrum: bool,
}

/// Analyze the spectrum of a decoded sample
pub fn analyze_spectrum(
    audio: &AudioSample,
    thresholds: QualityThresholds,
) -> Result<SpectralAnalysis, FftError> {
    measure_spectrum(&audio.to_mono(), audio.sample_rate(), thresholds)
}

/// Analyze the spectrum of an already downmixed signal
pub fn measure_spectrum(
    mono: &[f64],
    sample_rate: u32,
    thresholds: QualityThresholds,
) -> Result<SpectralAnalysis, FftError> {
    let n = mono.len();
    let spectrum = magnitude_spectrum(mono)?;

    let mut high_freq_energy = 0.0;
    let mut total_energy = 0.0;
    for (k, &magnitude) in spectrum.iter().enumerate() {
        total_energy += magnitude;
        if bin_frequency(k, sample_rate, n) > thresholds.min_high_freq_hz {
            high_freq_energy += magnitude;
        }
    }

    let high_freq_ratio = if total_energy > 0.0 {
        (high_freq_energy / total_energy).clamp(0.0, 1.0)
    } else {
        0.0
    };

    log::debug!(
        "{} bins, high-frequency energy {:.3} of {:.3} (ratio {:.5})",
        spectrum.len(),
        high_freq_energy,
        total_energy,
        high_freq_ratio
    );

    Ok(SpectralAnalysis {
        high_freq_energy,
        total_energy,
        high_freq_ratio,
        bad_spectrum: high_freq_ratio < thresholds.high_freq_ratio_threshold,
    })
}
