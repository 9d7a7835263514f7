// src/core/analyzer.rs
//
// Entry points tying the analyzers together.

use std::path::Path;

use super::analysis::{
    aggregate, analyze_bitrate, detect_fake_high_bitrate, measure_loudness, measure_spectrum,
    QualityFlags, QualityReport,
};
use super::decoder::decode_audio;
use super::sample::AudioSample;
use crate::config::QualityThresholds;
use crate::error::{AnalysisError, CheckError};

/// Evaluate one decoded sample against the thresholds
///
/// Failing quality is not an error: it is reported through the flags of the
/// returned report. Errors are limited to input that cannot be analyzed.
/// The result depends only on the arguments, so repeated calls produce
/// identical reports.
pub fn evaluate(
    sample: &AudioSample,
    declared_bitrate_kbps: u32,
    thresholds: QualityThresholds,
) -> Result<QualityReport, AnalysisError> {
    let bitrate = analyze_bitrate(declared_bitrate_kbps, thresholds)?;

    let mono = sample.to_mono();
    let loudness = measure_loudness(&mono, thresholds);
    let spectrum = measure_spectrum(&mono, sample.sample_rate(), thresholds)?;

    let fake_high_bitrate =
        detect_fake_high_bitrate(bitrate.bitrate_kbps, spectrum.high_freq_ratio, thresholds);

    let flags = QualityFlags {
        low_bitrate: bitrate.low_bitrate,
        low_volume: loudness.low_volume,
        bad_spectrum: spectrum.bad_spectrum,
        fake_high_bitrate,
    };

    Ok(aggregate(
        bitrate.bitrate_kbps,
        loudness.rms_dbfs,
        spectrum.high_freq_ratio,
        flags,
    ))
}

/// Decode a file and evaluate it
pub fn evaluate_file<P: AsRef<Path>>(
    path: P,
    thresholds: QualityThresholds,
) -> Result<QualityReport, CheckError> {
    let decoded = decode_audio(path.as_ref())?;
    let report = evaluate(&decoded.sample, decoded.declared_bitrate_kbps, thresholds)?;
    Ok(report)
}
