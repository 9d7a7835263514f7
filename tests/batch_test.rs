// tests/batch_test.rs
//
// File enumeration, batch runner behaviour and CLI exit codes.

mod test_utils;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use qualitycheck::cli::{JsonSink, TextSink};
use qualitycheck::{
    collect_audio_files, BatchRunner, BatchSummary, CheckError, QualityReport,
    QualityThresholds, ReportSink,
};
use test_utils::*;

/// Records every sink call as a short event string
#[derive(Default)]
struct RecordingSink {
    events: Vec<String>,
}

impl ReportSink for RecordingSink {
    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        self.events.push(format!("start {}", file_name(path)));
        Ok(())
    }

    fn file_report(&mut self, path: &Path, report: &QualityReport) -> io::Result<()> {
        self.events
            .push(format!("report {} pass={}", file_name(path), report.overall_pass()));
        Ok(())
    }

    fn file_error(&mut self, path: &Path, _error: &CheckError) -> io::Result<()> {
        self.events.push(format!("error {}", file_name(path)));
        Ok(())
    }

    fn summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        self.events.push(format!(
            "summary processed={} passed={}",
            summary.processed, summary.passed
        ));
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

/// clean.wav passes, tone.wav fails, broken.wav cannot be decoded
fn mixed_library(dir: &TempDir) -> Vec<PathBuf> {
    write_clean_wav(&dir.join("a_clean.wav"));
    write_tone_wav(&dir.join("b_tone.wav"));
    write_corrupt_file(&dir.join("c_broken.wav"));
    collect_audio_files(&[dir.path().to_path_buf()])
}

#[test]
fn test_directory_expansion_is_flat_and_sorted() {
    let dir = TempDir::new();
    write_clean_wav(&dir.join("b.wav"));
    write_clean_wav(&dir.join("a.WAV"));
    fs::write(dir.join("cover.jpg"), b"jpeg").unwrap();
    fs::write(dir.join("notes.txt"), b"text").unwrap();

    let nested = dir.join("disc2");
    fs::create_dir_all(&nested).unwrap();
    write_clean_wav(&nested.join("c.wav"));

    let files = collect_audio_files(&[dir.path().to_path_buf()]);
    let names: Vec<_> = files.iter().map(|p| file_name(p)).collect();
    assert_eq!(names, vec!["a.WAV", "b.wav"]);
}

#[test]
fn test_explicit_files_filtered_by_extension() {
    let dir = TempDir::new();
    let track = dir.join("track.wav");
    let image = dir.join("cover.png");
    write_clean_wav(&track);
    fs::write(&image, b"png").unwrap();

    let files = collect_audio_files(&[track.clone(), image, dir.join("missing.mp3")]);
    assert_eq!(files, vec![track]);
}

#[test]
fn test_batch_continues_after_decode_error() {
    let dir = TempDir::new();
    let files = mixed_library(&dir);
    assert_eq!(files.len(), 3);

    let mut sink = RecordingSink::default();
    let summary = BatchRunner::new(QualityThresholds::default())
        .run(&files, &mut sink)
        .unwrap();

    assert_eq!(
        sink.events,
        vec![
            "start a_clean.wav",
            "report a_clean.wav pass=true",
            "start b_tone.wav",
            "report b_tone.wav pass=false",
            "start c_broken.wav",
            "error c_broken.wav",
            "summary processed=3 passed=1",
        ]
    );
    assert_eq!(summary.failed, vec![dir.join("b_tone.wav")]);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].0, dir.join("c_broken.wav"));
    assert!(!summary.is_success());
}

#[test]
fn test_parallel_run_matches_sequential() {
    let dir = TempDir::new();
    let files = mixed_library(&dir);
    let thresholds = QualityThresholds::default();

    let mut sequential = RecordingSink::default();
    let seq_summary = BatchRunner::new(thresholds)
        .run(&files, &mut sequential)
        .unwrap();

    let mut parallel = RecordingSink::default();
    let par_summary = BatchRunner::new(thresholds)
        .jobs(4)
        .run(&files, &mut parallel)
        .unwrap();

    assert_eq!(sequential.events, parallel.events);
    assert_eq!(seq_summary, par_summary);
}

#[test]
fn test_text_output_lists_failures() {
    let dir = TempDir::new();
    let files = mixed_library(&dir);

    let mut sink = TextSink::new(Vec::new(), false);
    BatchRunner::new(QualityThresholds::default())
        .run(&files, &mut sink)
        .unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    assert!(text.contains("Overall: ✓ Audio quality seems fine"));
    assert!(text.contains("Overall: ⚠ Potential quality issues detected"));
    assert!(text.contains("Could not analyze file"));

    let summary = &text[text.find("Files with quality issues:").unwrap()..];
    assert!(summary.contains("b_tone.wav"));
    assert!(summary.contains("c_broken.wav"));
    assert!(!summary.contains("a_clean.wav"));
}

#[test]
fn test_json_output_one_record_per_file() {
    let dir = TempDir::new();
    let files = mixed_library(&dir);

    let mut sink = JsonSink::new(Vec::new());
    BatchRunner::new(QualityThresholds::default())
        .run(&files, &mut sink)
        .unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["report"]["overall_pass"], true);
    assert_eq!(records[1]["report"]["fake_high_bitrate"], true);
    assert!(records[2]["error"].is_string());
    assert_eq!(records[3]["summary"]["processed"], 3);
}

fn run_cli(args: &[&Path]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_qualitycheck"))
        .args(args)
        .arg("--no-color")
        .env_remove("QUALITYCHECK_CONFIG")
        .output()
        .expect("Failed to run qualitycheck")
}

#[test]
fn test_cli_exit_code_success() {
    let dir = TempDir::new();
    let clean = dir.join("clean.wav");
    write_clean_wav(&clean);

    let output = run_cli(&[clean.as_path()]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Analyzing:"));
    assert!(stdout.contains("Audio quality seems fine"));
}

#[test]
fn test_cli_exit_code_on_issues() {
    let dir = TempDir::new();
    mixed_library(&dir);

    let output = run_cli(&[dir.path()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files with quality issues:"));
    assert!(stdout.contains("b_tone.wav"));
    assert!(stdout.contains("c_broken.wav"));
}

#[test]
fn test_cli_no_audio_files() {
    let dir = TempDir::new();
    let output = run_cli(&[dir.path()]);
    assert_eq!(output.status.code(), Some(2));
}
