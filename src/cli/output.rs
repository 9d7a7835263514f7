//! Output formatting for CLI results

use colorful::Colorful;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::core::{BatchSummary, QualityReport, ReportSink, SILENCE_DBFS};
use crate::error::CheckError;

/// Human-readable report, one block per file
pub struct TextSink<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        let name = path.display().to_string();
        if self.color {
            writeln!(self.out, "Analyzing: {}", name.cyan())
        } else {
            writeln!(self.out, "Analyzing: {}", name)
        }
    }

    fn file_report(&mut self, _path: &Path, report: &QualityReport) -> io::Result<()> {
        write!(self.out, "{}", format_report(report, self.color))?;
        writeln!(self.out)
    }

    fn file_error(&mut self, _path: &Path, error: &CheckError) -> io::Result<()> {
        let line = format!("  ✗ Could not analyze file: {}", error);
        if self.color {
            writeln!(self.out, "{}", line.red())?;
        } else {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)
    }

    fn summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        write!(self.out, "{}", format_summary(summary, self.color))
    }
}

/// Format a single report as indented text lines
pub fn format_report(report: &QualityReport, color: bool) -> String {
    let low = |flagged: bool| -> String {
        match (flagged, color) {
            (false, _) => String::new(),
            (true, true) => format!(" {}", "(LOW)".yellow()),
            (true, false) => " (LOW)".to_string(),
        }
    };

    let mut output = String::new();

    output.push_str(&format!(
        "  Bitrate: {} kbps{}\n",
        report.bitrate_kbps(),
        low(report.low_bitrate())
    ));
    let volume = if report.rms_dbfs() <= SILENCE_DBFS {
        "-inf".to_string()
    } else {
        format!("{:.2}", report.rms_dbfs())
    };
    output.push_str(&format!(
        "  Volume (RMS): {} dBFS{}\n",
        volume,
        low(report.low_volume())
    ));
    output.push_str(&format!(
        "  High-frequency energy ratio: {:.4}{}\n",
        report.high_freq_ratio(),
        low(report.bad_spectrum())
    ));

    if report.fake_high_bitrate() {
        let warning =
            "  ⚠ WARNING: High bitrate but suspiciously low high-frequency content, likely upsampled.";
        if color {
            output.push_str(&format!("{}\n", warning.yellow()));
        } else {
            output.push_str(&format!("{}\n", warning));
        }
    }

    let verdict = match (report.overall_pass(), color) {
        (true, true) => "✓ Audio quality seems fine".green().to_string(),
        (true, false) => "✓ Audio quality seems fine".to_string(),
        (false, true) => "⚠ Potential quality issues detected".red().to_string(),
        (false, false) => "⚠ Potential quality issues detected".to_string(),
    };
    output.push_str(&format!("  Overall: {}\n", verdict));

    output
}

/// Format the end-of-batch summary listing every failing or erroring file
pub fn format_summary(summary: &BatchSummary, color: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Summary: {} file(s) analyzed, {} passed, {} with quality issues, {} could not be analyzed\n",
        summary.processed,
        summary.passed,
        summary.failed.len(),
        summary.errors.len()
    ));

    if summary.is_success() {
        return output;
    }

    let header = "Files with quality issues:";
    if color {
        output.push_str(&format!("{}\n", header.bold()));
    } else {
        output.push_str(&format!("{}\n", header));
    }
    for path in &summary.failed {
        output.push_str(&format!("  {}\n", path.display()));
    }
    for (path, error) in &summary.errors {
        output.push_str(&format!("  {} ({})\n", path.display(), error));
    }

    output
}

#[derive(Serialize)]
struct FileRecord<'a> {
    file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a QualityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    summary: &'a BatchSummary,
}

/// Machine-readable output, one JSON object per line
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn file_started(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn file_report(&mut self, path: &Path, report: &QualityReport) -> io::Result<()> {
        self.write_line(&FileRecord {
            file: path,
            report: Some(report),
            error: None,
        })
    }

    fn file_error(&mut self, path: &Path, error: &CheckError) -> io::Result<()> {
        self.write_line(&FileRecord {
            file: path,
            report: None,
            error: Some(error.to_string()),
        })
    }

    fn summary(&mut self, summary: &BatchSummary) -> io::Result<()> {
        self.write_line(&SummaryRecord { summary })
    }
}
