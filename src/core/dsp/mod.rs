//! Digital Signal Processing utilities

mod fft;
mod stats;

pub use fft::{bin_frequency, magnitude_spectrum};
pub use stats::{amplitude_to_dbfs, rms, SILENCE_DBFS};
