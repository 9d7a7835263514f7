//! Core analysis and decoding modules

pub mod analysis;
pub mod analyzer;
pub mod batch;
pub mod decoder;
pub mod dsp;
pub mod sample;

pub use analysis::{QualityFlags, QualityReport};
pub use analyzer::{evaluate, evaluate_file};
pub use batch::{collect_audio_files, BatchRunner, BatchSummary, ReportSink};
pub use decoder::{decode_audio, DecodedAudio};
pub use dsp::SILENCE_DBFS;
pub use sample::{AudioSample, FULL_SCALE};
