pub mod cli;
pub mod config;
pub mod error;
pub mod roster;
pub mod submission;
pub mod ui;

// Public API re-exports
pub use cli::{ExtractCli, ListsCli};
pub use config::{ExtractConfig, ListsConfig};
pub use error::{CourseworkError, Result, UserFriendlyError};

pub use roster::{read_roster, write_list, RosterRecord};
pub use submission::{
    parse_member_name, Deadline, ExtractionSummary, LatenessRecord, ParsedSubmission,
    SubmissionArchive,
};
pub use ui::{BarProgress, NoProgress, OutputFormatter, ProgressReporter};

use std::path::PathBuf;

/// Result of a completed extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub summary: ExtractionSummary,
    /// Set when a lateness report was written.
    pub late_file: Option<PathBuf>,
}

/// Extracts the archive named in `config` below its output root, then
/// writes the lateness report if anyone submitted after the deadline.
pub fn extract_submissions(
    config: &ExtractConfig,
    progress: &dyn ProgressReporter,
) -> Result<ExtractionOutcome> {
    let mut archive = SubmissionArchive::open(&config.archive_path, config.deadline.as_deref())?;
    let summary = archive.extract(&config.output_root, progress)?;

    let late_path = config.late_file_path();
    let late_file = summary
        .lateness
        .write_report(&late_path)?
        .then_some(late_path);

    Ok(ExtractionOutcome { summary, late_file })
}

/// Reads the enrolment file and writes the by-name and by-username lists.
/// Returns the number of students listed.
pub fn write_student_lists(config: &ListsConfig) -> Result<usize> {
    let mut records = read_roster(&config.csv_path)?;

    // Enrolment exports are already in name order.
    write_list(&records, &config.names_path, config.numbered)?;

    records.sort();
    write_list(&records, &config.usernames_path, config.numbered)?;

    Ok(records.len())
}
