//! Error types for decoding, analysis and configuration
//!
//! A track that fails a quality check is not an error: that outcome lives in
//! the flags of a [`QualityReport`](crate::QualityReport). The types here only
//! cover inputs that cannot be analyzed at all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Input rejected before any analyzer runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("declared bitrate must be positive")]
    NonPositiveBitrate,

    #[error("sample buffer is empty")]
    EmptyBuffer,

    #[error("sample rate must be positive")]
    InvalidSampleRate,

    #[error("unsupported channel count: {0} (expected 1 or 2)")]
    UnsupportedChannelCount(usize),

    #[error("buffer of {len} samples is not a whole number of {channels}-channel frames")]
    RaggedBuffer { len: usize, channels: usize },
}

/// Failure inside the analysis pipeline
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Malformed(#[from] MalformedInput),

    #[error("spectrum transform failed: {0}")]
    Transform(#[from] realfft::FftError),
}

/// The decoder could not produce a sample buffer from a file
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to probe file format (corrupted or unsupported): {0}")]
    Probe(#[source] symphonia::core::errors::Error),

    #[error("no supported audio track found in file")]
    NoAudioTrack,

    #[error("file does not specify a sample rate")]
    MissingSampleRate,

    #[error("codec error: {0}")]
    Codec(#[from] symphonia::core::errors::Error),

    #[error("no audio samples decoded from file")]
    NoSamples,

    #[error("decoded audio is malformed: {0}")]
    Malformed(#[from] MalformedInput),
}

/// Per-file failure recorded by the batch runner
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Threshold configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid threshold: {0}")]
    Invalid(String),
}
