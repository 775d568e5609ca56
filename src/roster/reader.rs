use crate::error::{CourseworkError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// A student's username and display name.
///
/// Field order matters: sorting records orders by username, then name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RosterRecord {
    pub username: String,
    pub full_name: String,
}

impl RosterRecord {
    pub fn new(username: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnrolmentRow {
    #[serde(rename = "Student Name")]
    student_name: String,
    #[serde(rename = "Email Address")]
    email_address: String,
}

/// Reads a module enrolment CSV export (header row required) and returns
/// one record per data row, in file order.
pub fn read_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<RosterRecord>> {
    let csv_path = csv_path.as_ref();
    let reader = csv::Reader::from_path(csv_path).map_err(|source| CourseworkError::RosterRead {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let records = read_records(reader)?;
    tracing::info!(path = %csv_path.display(), students = records.len(), "read enrolment file");
    Ok(records)
}

/// Same as [`read_roster`] over any reader.
pub fn read_roster_from<R: Read>(input: R) -> Result<Vec<RosterRecord>> {
    read_records(csv::Reader::from_reader(input))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RosterRecord>> {
    let headers = reader
        .headers()
        .map_err(|e| malformed(1, e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            malformed(line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let enrolment: EnrolmentRow = row
            .deserialize(Some(&headers))
            .map_err(|e| malformed(line, e.to_string()))?;

        records.push(to_record(line, enrolment)?);
    }

    Ok(records)
}

fn to_record(line: u64, row: EnrolmentRow) -> Result<RosterRecord> {
    let email = row.email_address.trim();
    let (username, _domain) = email
        .split_once('@')
        .ok_or_else(|| malformed(line, format!("email address '{}' has no '@'", email)))?;

    Ok(RosterRecord::new(username, row.student_name.trim()))
}

fn malformed(line: u64, reason: String) -> CourseworkError {
    CourseworkError::MalformedRosterRow { line, reason }
}
