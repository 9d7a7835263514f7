//! Audio analysis algorithms
//!
//! One module per measurement:
//! - Bitrate (declared encoding bitrate)
//! - Loudness (RMS level in dBFS)
//! - Spectral (share of magnitude above a cutoff frequency)
//! - Fake high bitrate (high declared bitrate without high-frequency content)
//! - Verdict (combines the flags into a report)

mod bitrate;
mod fake_bitrate;
mod loudness;
mod spectral;
mod verdict;

pub use bitrate::{analyze_bitrate, BitrateAnalysis};
pub use fake_bitrate::detect_fake_high_bitrate;
pub use loudness::{analyze_loudness, measure_loudness, LoudnessAnalysis};
pub use spectral::{analyze_spectrum, measure_spectrum, SpectralAnalysis};
pub use verdict::{aggregate, QualityFlags, QualityReport};
