//! CLI argument parsing

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{QualityThresholds, ThresholdsBuilder};
use crate::error::ConfigError;

/// Check audio files for low bitrate, low volume and fake high-bitrate encodes
#[derive(Parser, Debug)]
#[command(name = "qualitycheck", version)]
#[command(about = "Check audio files for low bitrate, low volume and upsampled/transcoded spectra")]
pub struct Args {
    /// Audio files or directories (directories are not searched recursively)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// JSON file with threshold overrides
    #[arg(long, env = "QUALITYCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum declared bitrate in kbps
    #[arg(long)]
    pub min_bitrate: Option<u32>,

    /// Minimum RMS loudness in dBFS
    #[arg(long, allow_hyphen_values = true)]
    pub min_volume: Option<f64>,

    /// Frequency above which spectral energy counts as high-frequency (Hz)
    #[arg(long)]
    pub min_high_freq: Option<f64>,

    /// Minimum share of spectral energy above the high-frequency cutoff
    #[arg(long)]
    pub high_freq_ratio: Option<f64>,

    /// Declared bitrate from which the fake high-bitrate check applies (kbps)
    #[arg(long)]
    pub fake_bitrate_floor: Option<u32>,

    /// High-frequency ratio below which a high-bitrate file is reported as fake
    #[arg(long)]
    pub fake_bitrate_cutoff: Option<f64>,

    /// Number of files to analyze in parallel
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Output one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve thresholds: defaults, then config file, then individual flags
    pub fn thresholds(&self) -> Result<QualityThresholds, ConfigError> {
        let base = match &self.config {
            Some(path) => QualityThresholds::load(path)?,
            None => match QualityThresholds::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    log::info!("using thresholds from {}", path.display());
                    QualityThresholds::load(path)?
                }
                None => QualityThresholds::default(),
            },
        };

        let mut builder = ThresholdsBuilder::from_thresholds(base);
        if let Some(v) = self.min_bitrate {
            builder = builder.min_bitrate_kbps(v);
        }
        if let Some(v) = self.min_volume {
            builder = builder.min_volume_dbfs(v);
        }
        if let Some(v) = self.min_high_freq {
            builder = builder.min_high_freq_hz(v);
        }
        if let Some(v) = self.high_freq_ratio {
            builder = builder.high_freq_ratio_threshold(v);
        }
        if let Some(v) = self.fake_bitrate_floor {
            builder = builder.fake_bitrate_floor_kbps(v);
        }
        if let Some(v) = self.fake_bitrate_cutoff {
            builder = builder.fake_bitrate_ratio_cutoff(v);
        }
        builder.build()
    }

    /// Log level selected by the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
