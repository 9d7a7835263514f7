//! Configuration module for qualitycheck

mod thresholds;

pub use thresholds::{QualityThresholds, ThresholdsBuilder};
