// src/core/batch.rs
//
// Batch processing: expand input paths, evaluate each file and hand the
// results to a reporting sink. A failing file never stops the batch.

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::analysis::QualityReport;
use super::analyzer::evaluate_file;
use crate::config::QualityThresholds;
use crate::error::CheckError;

/// Extensions treated as audio files when expanding paths
pub const AUDIO_EXTENSIONS: [&str; 8] = ["mp3", "flac", "wav", "ogg", "m4a", "aac", "opus", "aiff"];

/// Receives per-file output from the batch runner
pub trait ReportSink {
    fn file_started(&mut self, path: &Path) -> io::Result<()>;
    fn file_report(&mut self, path: &Path, report: &QualityReport) -> io::Result<()>;
    fn file_error(&mut self, path: &Path, error: &CheckError) -> io::Result<()>;
    fn summary(&mut self, summary: &BatchSummary) -> io::Result<()>;
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub passed: usize,
    /// Files whose report did not pass
    pub failed: Vec<PathBuf>,
    /// Files that could not be decoded or analyzed
    pub errors: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    /// True when every file passed and nothing errored
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.errors.is_empty()
    }

    fn record(&mut self, path: &Path, result: &Result<QualityReport, CheckError>) {
        self.processed += 1;
        match result {
            Ok(report) if report.overall_pass() => self.passed += 1,
            Ok(_) => self.failed.push(path.to_path_buf()),
            Err(e) => self.errors.push((path.to_path_buf(), e.to_string())),
        }
    }
}

/// Check whether a path has a known audio extension
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand files and directories into a list of audio files
///
/// Directories are expanded one level deep, sorted by file name. Files
/// without an audio extension and missing paths are skipped with a warning.
pub fn collect_audio_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
            {
                match entry {
                    Ok(entry) if entry.file_type().is_file() && is_audio_file(entry.path()) => {
                        files.push(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("skipping unreadable entry in {}: {}", path.display(), e),
                }
            }
        } else if path.is_file() {
            if is_audio_file(path) {
                files.push(path.clone());
            } else {
                log::warn!("skipping non-audio file: {}", path.display());
            }
        } else {
            log::warn!("path not found: {}", path.display());
        }
    }

    files
}

/// Runs the evaluation over a list of files
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    thresholds: QualityThresholds,
    jobs: usize,
    show_progress: bool,
}

impl BatchRunner {
    pub fn new(thresholds: QualityThresholds) -> Self {
        Self {
            thresholds,
            jobs: 1,
            show_progress: false,
        }
    }

    /// Number of worker threads; 1 processes files strictly in sequence
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Show a progress bar on stderr while a parallel batch runs
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Evaluate every file and report it to the sink in input order
    pub fn run(&self, files: &[PathBuf], sink: &mut dyn ReportSink) -> io::Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        if self.jobs == 1 || files.len() < 2 {
            for path in files {
                sink.file_started(path)?;
                let result = self.evaluate_one(path);
                self.report(path, &result, sink, &mut summary)?;
            }
        } else {
            let results = self.evaluate_parallel(files);
            for (path, result) in files.iter().zip(results.iter()) {
                sink.file_started(path)?;
                self.report(path, result, sink, &mut summary)?;
            }
        }

        sink.summary(&summary)?;
        Ok(summary)
    }

    fn evaluate_one(&self, path: &Path) -> Result<QualityReport, CheckError> {
        log::info!("analyzing {}", path.display());
        let result = evaluate_file(path, self.thresholds);
        if let Err(ref e) = result {
            log::warn!("{}: {}", path.display(), e);
        }
        result
    }

    fn evaluate_parallel(&self, files: &[PathBuf]) -> Vec<Result<QualityReport, CheckError>> {
        let progress = if self.show_progress {
            let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} files ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            ProgressBar::new(files.len() as u64).with_style(style)
        } else {
            ProgressBar::hidden()
        };

        let work = || {
            files
                .par_iter()
                .progress_with(progress.clone())
                .map(|path| self.evaluate_one(path))
                .collect::<Vec<_>>()
        };

        let results = match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => pool.install(work),
            Err(e) => {
                log::warn!("failed to build thread pool ({}), using the global pool", e);
                work()
            }
        };

        progress.finish_and_clear();
        results
    }

    fn report(
        &self,
        path: &Path,
        result: &Result<QualityReport, CheckError>,
        sink: &mut dyn ReportSink,
        summary: &mut BatchSummary,
    ) -> io::Result<()> {
        summary.record(path, result);
        match result {
            Ok(report) => sink.file_report(path, report),
            Err(e) => sink.file_error(path, e),
        }
    }
}
