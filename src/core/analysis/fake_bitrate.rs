// src/core/analysis/fake_bitrate.rs
//
// A file that claims a high bitrate but carries almost no high-frequency
// energy was most likely re-encoded from a lossy source. This check uses its
// own floor and cutoff, independent of the low-bitrate and spectrum checks.

use crate::config::QualityThresholds;

pub fn detect_fake_high_bitrate(
    bitrate_kbps: u32,
    high_freq_ratio: f64,
    thresholds: QualityThresholds,
) -> bool {
    bitrate_kbps >= thresholds.fake_bitrate_floor_kbps
        && high_freq_ratio < thresholds.fake_bitrate_ratio_cutoff
}
