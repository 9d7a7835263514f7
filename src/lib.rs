//! qualitycheck - Flag poorly encoded audio before it is filed away
//!
//! Each decoded track goes through three numeric analyzers and a combiner:
//!
//! - **Bitrate**: the declared encoding bitrate against a minimum
//! - **Loudness**: RMS level in dBFS against a minimum
//! - **Spectral**: share of FFT magnitude above a cutoff frequency; lossy
//!   transcodes and upsampled files carry almost none
//! - **Fake high bitrate**: a high declared bitrate with no high-frequency
//!   content, checked with its own floor and cutoff
//!
//! The verdict passes only when none of the four flags is raised. A failing
//! verdict is a normal result, not an error.
//!
//! ## Module Structure
//!
//! - `core` - Decoding, analyzers and the batch runner
//! - `cli` - Command-line interface and report sinks
//! - `config` - Threshold configuration
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qualitycheck::{evaluate_file, QualityThresholds};
//!
//! let report = evaluate_file("album/01.mp3", QualityThresholds::default())?;
//! if !report.overall_pass() {
//!     println!("ratio above 14 kHz: {:.4}", report.high_freq_ratio());
//! }
//! ```
//!
//! ## Default Thresholds
//!
//! | Threshold                   | Default   |
//! |-----------------------------|-----------|
//! | `min_bitrate_kbps`          | 128       |
//! | `min_volume_dbfs`           | -20       |
//! | `min_high_freq_hz`          | 14000     |
//! | `high_freq_ratio_threshold` | 0.02      |
//! | `fake_bitrate_floor_kbps`   | 256       |
//! | `fake_bitrate_ratio_cutoff` | 0.02      |

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Threshold configuration
pub mod config;

pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{QualityThresholds, ThresholdsBuilder};
pub use self::core::{
    collect_audio_files, decode_audio, evaluate, evaluate_file, AudioSample, BatchRunner,
    BatchSummary, DecodedAudio, QualityFlags, QualityReport, ReportSink, SILENCE_DBFS,
};
pub use error::{AnalysisError, CheckError, ConfigError, DecodeError, MalformedInput};
