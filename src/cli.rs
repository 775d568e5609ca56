use crate::config::{ExtractConfig, ListsConfig, DEFAULT_LATE_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extract-submissions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extracts assignment submissions from a Zip archive")]
#[command(
    long_about = "Extracts assignment submissions from the Zip archive downloaded from the \
                  grade centre into one directory per assignment and one subdirectory per \
                  student. With --deadline, students who submitted after the deadline are \
                  listed, with how late they were, in a lateness file."
)]
#[command(after_help = "EXAMPLES:\n  \
    extract-submissions gradebook_HW1.zip\n  \
    extract-submissions gradebook_HW1.zip --deadline 2024-01-10:23:00\n  \
    extract-submissions gradebook_HW1.zip --deadline 2024-01-10:23:00 --latefile hw1-late.txt -v")]
#[command(arg_required_else_help = true)]
pub struct ExtractCli {
    /// Name of Zip archive containing submissions
    pub zip_path: PathBuf,

    /// Submission deadline, as YYYY-MM-DD:hh:mm
    #[arg(short, long)]
    pub deadline: Option<String>,

    /// File listing late submissions (only written if someone was late)
    #[arg(short, long, default_value = DEFAULT_LATE_FILE)]
    pub latefile: PathBuf,

    /// Print a summary after extracting (-vv, -vvv for diagnostics)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Don't show a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl ExtractCli {
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig::new(self.zip_path.clone())
            .with_deadline(self.deadline.clone())
            .with_late_file(self.latefile.clone())
            .with_verbose(self.verbose)
            .with_progress(!self.no_progress)
    }
}

#[derive(Parser, Debug)]
#[command(name = "student-lists")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Creates lists of student names & usernames from a module enrolment file")]
#[command(
    long_about = "Creates lists of student names & usernames from a module enrolment file.\n\n\
                  The module enrolment file is the standard CSV export with 'Student Name' \
                  and 'Email Address' columns.\n\n\
                  Two lists are written: one in enrolment file order (sorted by student \
                  name), the other sorted by username. List entries can optionally be \
                  numbered. Together they map from name to username and back, reconciling \
                  coursework downloaded by username with gradebooks listed by name."
)]
#[command(arg_required_else_help = true)]
pub struct ListsCli {
    /// Path to module enrolment CSV file
    pub csv_path: PathBuf,

    /// Path to 'sorted by name' list
    pub names_path: PathBuf,

    /// Path to 'sorted by username' list
    pub usernames_path: PathBuf,

    /// Add line numbers to both output files
    #[arg(short, long)]
    pub numbered: bool,

    /// Report what was written (-vv, -vvv for diagnostics)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ListsCli {
    pub fn to_config(&self) -> ListsConfig {
        ListsConfig {
            csv_path: self.csv_path.clone(),
            names_path: self.names_path.clone(),
            usernames_path: self.usernames_path.clone(),
            numbered: self.numbered,
        }
    }
}

/// Log level for the diagnostic subscriber given a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "warn",
        2 => "info",
        _ => "debug",
    }
}
