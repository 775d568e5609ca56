use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseworkError {
    #[error("Not a readable Zip archive: {path} ({reason})")]
    InvalidArchive { path: PathBuf, reason: String },

    #[error("Invalid deadline '{value}' (expected YYYY-MM-DD:hh:mm)")]
    InvalidDeadline { value: String },

    #[error("Failed to read archive member {member}")]
    ArchiveRead {
        member: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive member would be written outside its submission directory: {member}")]
    UnsafeMemberPath { member: String },

    #[error("Malformed enrolment row at line {line}: {reason}")]
    MalformedRosterRow { line: u64, reason: String },

    #[error("Failed to read enrolment file {path}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub trait UserFriendlyError {
    fn suggestion(&self) -> Option<String>;
    fn exit_code(&self) -> i32;
}

impl UserFriendlyError for CourseworkError {
    fn suggestion(&self) -> Option<String> {
        match self {
            CourseworkError::InvalidArchive { .. } => Some(
                "Check the path and make sure the file is the Zip archive downloaded from the assignment's grade centre.".to_string()
            ),
            CourseworkError::InvalidDeadline { .. } => Some(
                "Give the deadline as date and 24-hour time, e.g. --deadline 2024-01-10:23:00".to_string()
            ),
            CourseworkError::UnsafeMemberPath { .. } => Some(
                "The archive contains a suspicious file name; inspect it manually before extracting.".to_string()
            ),
            CourseworkError::MalformedRosterRow { .. } => Some(
                "The enrolment file needs 'Student Name' and 'Email Address' columns and a full email address on every row.".to_string()
            ),
            CourseworkError::Write { .. } => Some(
                "Ensure you have write permission in the current directory and enough free disk space.".to_string()
            ),
            _ => None,
        }
    }

    // clap already exits with 2 on usage errors.
    fn exit_code(&self) -> i32 {
        match self {
            CourseworkError::ArchiveRead { .. } => 1,
            CourseworkError::InvalidDeadline { .. } => 3,
            CourseworkError::MalformedRosterRow { .. } | CourseworkError::RosterRead { .. } => 4,
            CourseworkError::Write { .. } | CourseworkError::UnsafeMemberPath { .. } => 5,
            CourseworkError::InvalidArchive { .. } => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseworkError>;
