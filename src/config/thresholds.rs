// src/config/thresholds.rs
//
// Numeric thresholds that decide when a measurement counts as a quality issue

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// File name looked up under the platform config directory
const CONFIG_FILE_NAME: &str = "thresholds.json";

/// Thresholds passed into every analyzer call
///
/// Missing keys in a JSON config fall back to the defaults, so a file may
/// override only the values it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Declared bitrates below this are flagged as low
    pub min_bitrate_kbps: u32,
    /// RMS loudness below this is flagged as low volume
    pub min_volume_dbfs: f64,
    /// Bins above this frequency count as high-frequency energy
    pub min_high_freq_hz: f64,
    /// High-frequency ratios below this are flagged as a bad spectrum
    pub high_freq_ratio_threshold: f64,
    /// Declared bitrate at which the fake high-bitrate check starts applying
    pub fake_bitrate_floor_kbps: u32,
    /// High-frequency ratio below which a high-bitrate file is considered fake
    pub fake_bitrate_ratio_cutoff: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_bitrate_kbps: 128,
            min_volume_dbfs: -20.0,
            min_high_freq_hz: 14_000.0,
            high_freq_ratio_threshold: 0.02,
            fake_bitrate_floor_kbps: 256,
            fake_bitrate_ratio_cutoff: 0.02,
        }
    }
}

impl QualityThresholds {
    /// Create a builder starting from the defaults
    pub fn builder() -> ThresholdsBuilder {
        ThresholdsBuilder::new()
    }

    /// Parse thresholds from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let thresholds: Self = serde_json::from_str(json)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Default config location, e.g. `~/.config/qualitycheck/thresholds.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qualitycheck").join(CONFIG_FILE_NAME))
    }

    /// Check that every value is usable by the analyzers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min_volume_dbfs", self.min_volume_dbfs),
            ("min_high_freq_hz", self.min_high_freq_hz),
            ("high_freq_ratio_threshold", self.high_freq_ratio_threshold),
            ("fake_bitrate_ratio_cutoff", self.fake_bitrate_ratio_cutoff),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite", name)));
            }
        }

        if self.min_high_freq_hz <= 0.0 {
            return Err(ConfigError::Invalid(
                "min_high_freq_hz must be positive".to_string(),
            ));
        }

        for (name, ratio) in [
            ("high_freq_ratio_threshold", self.high_freq_ratio_threshold),
            ("fake_bitrate_ratio_cutoff", self.fake_bitrate_ratio_cutoff),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::Invalid(format!(
                    "{} must lie in [0, 1], got {}",
                    name, ratio
                )));
            }
        }

        Ok(())
    }
}

/// Builder for overriding individual thresholds
pub struct ThresholdsBuilder {
    thresholds: QualityThresholds,
}

impl ThresholdsBuilder {
    pub fn new() -> Self {
        Self {
            thresholds: QualityThresholds::default(),
        }
    }

    pub fn from_thresholds(thresholds: QualityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn min_bitrate_kbps(mut self, kbps: u32) -> Self {
        self.thresholds.min_bitrate_kbps = kbps;
        self
    }

    pub fn min_volume_dbfs(mut self, dbfs: f64) -> Self {
        self.thresholds.min_volume_dbfs = dbfs;
        self
    }

    pub fn min_high_freq_hz(mut self, hz: f64) -> Self {
        self.thresholds.min_high_freq_hz = hz;
        self
    }

    pub fn high_freq_ratio_threshold(mut self, ratio: f64) -> Self {
        self.thresholds.high_freq_ratio_threshold = ratio;
        self
    }

    pub fn fake_bitrate_floor_kbps(mut self, kbps: u32) -> Self {
        self.thresholds.fake_bitrate_floor_kbps = kbps;
        self
    }

    pub fn fake_bitrate_ratio_cutoff(mut self, ratio: f64) -> Self {
        self.thresholds.fake_bitrate_ratio_cutoff = ratio;
        self
    }

    /// Validate and return the thresholds
    pub fn build(self) -> Result<QualityThresholds, ConfigError> {
        self.thresholds.validate()?;
        Ok(self.thresholds)
    }
}

impl Default for ThresholdsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
