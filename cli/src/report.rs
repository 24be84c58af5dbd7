use std::io::{self, Write};
use std::path::PathBuf;

use heic_compressor_core::converter::ConversionStats;
use heic_compressor_core::job::ConversionJob;

/// Result of converting a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub converted_size: u64,
    pub error: Option<String>,
}

impl FileResult {
    pub fn success(job: &ConversionJob, stats: &ConversionStats) -> Self {
        Self {
            input: job.input().to_path_buf(),
            output: job.output().to_path_buf(),
            original_size: stats.original_size,
            converted_size: stats.converted_size,
            error: None,
        }
    }

    pub fn failure(input: PathBuf, output: PathBuf, error: impl ToString) -> Self {
        Self {
            input,
            output,
            original_size: 0,
            converted_size: 0,
            error: Some(error.to_string()),
        }
    }

    pub fn savings_pct(&self) -> f64 {
        reduction_pct(self.original_size, self.converted_size)
    }
}

/// Aggregate report for one batch run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total_original(&self) -> u64 {
        self.results.iter().map(|r| r.original_size).sum()
    }

    pub fn total_converted(&self) -> u64 {
        self.results.iter().map(|r| r.converted_size).sum()
    }

    pub fn total_savings_pct(&self) -> f64 {
        reduction_pct(self.total_original(), self.total_converted())
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_none()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }

    pub fn print_summary(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_summary(&mut stdout.lock()) {
            log::warn!("Could not print summary: {}", e);
        }
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- Summary ---")?;

        if self.is_empty() {
            writeln!(out, "No supported images found.")?;
            return Ok(());
        }

        writeln!(
            out,
            "Converted: {} | Failed: {}",
            self.success_count(),
            self.error_count()
        )?;

        if self.success_count() > 0 {
            writeln!(
                out,
                "Total: {} → {} ({:.1}% reduction)",
                format_size(self.total_original()),
                format_size(self.total_converted()),
                self.total_savings_pct()
            )?;
        }

        for r in &self.results {
            if let Some(ref err) = r.error {
                writeln!(out, "  ERROR {}: {}", r.input.display(), err)?;
            }
        }

        Ok(())
    }
}

/// Percentage by which `after` is smaller than `before`; 0 for empty input.
fn reduction_pct(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before as f64 - after as f64) / before as f64 * 100.0
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{} B", bytes),
        1 => format!("{:.1} KB", value),
        _ => format!("{:.2} {}", value, UNITS[unit]),
    }
}
