// src/core/analysis/verdict.rs
//
// Combines analyzer flags into the per-file report.

use serde::Serialize;

/// The four independent quality flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityFlags {
    pub low_bitrate: bool,
    pub low_volume: bool,
    pub bad_spectrum: bool,
    pub fake_high_bitrate: bool,
}

impl QualityFlags {
    pub fn any(&self) -> bool {
        self.low_bitrate || self.low_volume || self.bad_spectrum || self.fake_high_bitrate
    }
}

/// Immutable quality verdict for one file
///
/// Only [`aggregate`] builds a report, so `overall_pass` always matches the
/// flags it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityReport {
    bitrate_kbps: u32,
    rms_dbfs: f64,
    high_freq_ratio: f64,
    #[serde(flatten)]
    flags: QualityFlags,
    overall_pass: bool,
}

/// Build the report; the pass verdict is true iff no flag is raised
pub fn aggregate(
    bitrate_kbps: u32,
    rms_dbfs: f64,
    high_freq_ratio: f64,
    flags: QualityFlags,
) -> QualityReport {
    QualityReport {
        bitrate_kbps,
        rms_dbfs,
        high_freq_ratio,
        flags,
        overall_pass: !flags.any(),
    }
}

impl QualityReport {
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    pub fn rms_dbfs(&self) -> f64 {
        self.rms_dbfs
    }

    pub fn high_freq_ratio(&self) -> f64 {
        self.high_freq_ratio
    }

    pub fn flags(&self) -> QualityFlags {
        self.flags
    }

    pub fn low_bitrate(&self) -> bool {
        self.flags.low_bitrate
    }

    pub fn low_volume(&self) -> bool {
        self.flags.low_volume
    }

    pub fn bad_spectrum(&self) -> bool {
        self.flags.bad_spectrum
    }

    pub fn fake_high_bitrate(&self) -> bool {
        self.flags.fake_high_bitrate
    }

    pub fn overall_pass(&self) -> bool {
        self.overall_pass
    }
}
