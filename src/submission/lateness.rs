use crate::error::{CourseworkError, Result};
use crate::submission::deadline::format_lateness;
use chrono::Duration;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Lateness per submitter for one extraction run.
///
/// A submitter seen late more than once keeps only the most recently
/// recorded duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatenessRecord {
    late: BTreeMap<String, Duration>,
}

impl LatenessRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, submitter: &str, lateness: Duration) {
        self.late.insert(submitter.to_string(), lateness);
    }

    pub fn get(&self, submitter: &str) -> Option<Duration> {
        self.late.get(submitter).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.late.is_empty()
    }

    pub fn len(&self) -> usize {
        self.late.len()
    }

    /// Report lines sorted by submitter, names right-aligned to a common width.
    pub fn report_lines(&self) -> Vec<String> {
        let width = self.late.keys().map(|s| s.chars().count()).max().unwrap_or(0);

        self.late
            .iter()
            .map(|(submitter, lateness)| {
                format!("{:>width$}: {}", submitter, format_lateness(*lateness), width = width)
            })
            .collect()
    }

    /// Writes the report to `path`. Nothing is written when no one was
    /// late; the return value says whether the file was produced.
    pub fn write_report(&self, path: &Path) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }

        let to_write_error = |source| CourseworkError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        for line in self.report_lines() {
            writeln!(writer, "{}", line).map_err(to_write_error)?;
        }
        writer.flush().map_err(to_write_error)?;

        tracing::info!(path = %path.display(), late = self.len(), "wrote lateness report");
        Ok(true)
    }
}
