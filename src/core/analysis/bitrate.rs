// src/core/analysis/bitrate.rs
//
// Declared bitrate check. The figure comes from the decoder, not the signal.

use crate::config::QualityThresholds;
use crate::error::MalformedInput;

/// Bitrate analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitrateAnalysis {
    pub bitrate_kbps: u32,
    pub low_bitrate: bool,
}

/// Flag bitrates strictly below `min_bitrate_kbps`
pub fn analyze_bitrate(
    declared_kbps: u32,
    thresholds: QualityThresholds,
) -> Result<BitrateAnalysis, MalformedInput> {
    if declared_kbps == 0 {
        return Err(MalformedInput::NonPositiveBitrate);
    }

    Ok(BitrateAnalysis {
        bitrate_kbps: declared_kbps,
        low_bitrate: declared_kbps < thresholds.min_bitrate_kbps,
    })
}
