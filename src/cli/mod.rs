// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use crate::core::{collect_audio_files, BatchRunner, ReportSink};

pub use args::Args;
pub use output::{format_report, format_summary, JsonSink, TextSink};

/// Exit code when a file failed its checks or could not be analyzed
pub const EXIT_ISSUES: u8 = 1;
/// Exit code for configuration or usage problems
pub const EXIT_USAGE: u8 = 2;

/// Run the CLI with parsed arguments
pub fn run(args: &Args) -> Result<ExitCode> {
    let thresholds = args.thresholds().context("Failed to load thresholds")?;
    log::debug!("thresholds: {:?}", thresholds);

    let files = collect_audio_files(&args.paths);
    if files.is_empty() {
        eprintln!("No audio files found!");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut sink: Box<dyn ReportSink> = if args.json {
        Box::new(JsonSink::new(stdout.lock()))
    } else {
        Box::new(TextSink::new(stdout.lock(), interactive && !args.no_color))
    };

    let summary = BatchRunner::new(thresholds)
        .jobs(args.jobs)
        .show_progress(io::stderr().is_terminal() && !args.json)
        .run(&files, sink.as_mut())
        .context("Failed to write report")?;

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_ISSUES))
    }
}
