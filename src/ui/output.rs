use crate::submission::ExtractionSummary;
use console::{style, Term};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
}

/// Everything the tools print for people: the verbose run summary and the
/// single `Error:` line on failure.
pub struct OutputFormatter {
    mode: OutputMode,
    verbose_level: u8,
}

impl OutputFormatter {
    pub fn new(verbose: u8) -> Self {
        let mode = if Term::stdout().features().colors_supported() {
            OutputMode::Human
        } else {
            OutputMode::Plain
        };

        Self::with_mode(mode, verbose)
    }

    pub fn with_mode(mode: OutputMode, verbose: u8) -> Self {
        Self {
            mode,
            verbose_level: verbose,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose_level > 0
    }

    /// Prints the one-line failure report. The remedy hint rides on the
    /// same line, and only with `-v`.
    pub fn error(&self, message: &str, suggestion: Option<&str>) {
        let line = error_line(message, suggestion, self.is_verbose());
        match self.mode {
            OutputMode::Human => eprintln!("{} {}", style("Error:").for_stderr().red().bold(), line),
            OutputMode::Plain => eprintln!("Error: {}", line),
        }
    }

    /// Prints the post-run summary; only shown with `-v`.
    pub fn print_extraction_summary(&self, summary: &ExtractionSummary, late_file: Option<&Path>) {
        if !self.is_verbose() {
            return;
        }

        let lines = summary_lines(summary, late_file);
        match self.mode {
            OutputMode::Human => {
                let (head, rest) = lines.split_at(1);
                println!("{}", style(&head[0]).green().bold());
                for line in rest {
                    println!("{}", line);
                }
            }
            OutputMode::Plain => {
                for line in lines {
                    println!("{}", line);
                }
            }
        }
    }
}

fn error_line(message: &str, suggestion: Option<&str>, verbose: bool) -> String {
    match suggestion {
        Some(hint) if verbose => format!("{} (suggestion: {})", message, hint),
        _ => message.to_string(),
    }
}

fn summary_lines(summary: &ExtractionSummary, late_file: Option<&Path>) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} submitters, {} files extracted",
            summary.submitters.len(),
            summary.files_written
        ),
        format!("Skipped {} other archive members", summary.members_skipped),
    ];

    if summary.lateness.is_empty() {
        lines.push("No late submissions".to_string());
    } else {
        lines.push(format!("{} late submitters:", summary.lateness.len()));
        lines.extend(summary.lateness.report_lines().into_iter().map(|l| format!("  {}", l)));
        if let Some(path) = late_file {
            lines.push(format!("Lateness report written to {}", path.display()));
        }
    }

    lines
}
