use chrono::NaiveDateTime;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Timestamp layout used inside archive member names.
pub const MEMBER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

// assignment is greedy and may contain underscores; the submitter is a
// plain word so it can never swallow the `_attempt_` delimiter.
static MEMBER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<assignment>.+)_(?P<submitter>\w+)_attempt_(?P<timestamp>[0-9]{4}-[0-9]{2}-[0-9]{2}-[0-9]{2}-[0-9]{2}-[0-9]{2})(?P<sep>.)(?P<filename>.+)$",
    )
    .expect("member name pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One submission entry recognised from an archive member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubmission {
    pub assignment: String,
    pub submitter: String,
    pub submitted_at: NaiveDateTime,
    pub original_filename: String,
    separator: char,
}

impl ParsedSubmission {
    /// Directory, relative to the extraction root, that receives this
    /// submission's files.
    pub fn destination_dir(&self) -> PathBuf {
        PathBuf::from(normalize_assignment(&self.assignment)).join(&self.submitter)
    }

    /// Rebuilds the archive member name this submission was parsed from.
    pub fn member_name(&self) -> String {
        format!(
            "{}_{}_attempt_{}{}{}",
            self.assignment,
            self.submitter,
            self.submitted_at.format(MEMBER_TIMESTAMP_FORMAT),
            self.separator,
            self.original_filename
        )
    }
}

/// Parses an archive member name of the form
/// `<assignment>_<submitter>_attempt_<YYYY-MM-DD-HH-MM-SS>.<filename>`.
///
/// Returns `None` for anything that is not a submission entry, including
/// names whose timestamp has the right shape but is not a real date.
pub fn parse_member_name(name: &str) -> Option<ParsedSubmission> {
    let captures = MEMBER_NAME.captures(name)?;

    let submitted_at =
        NaiveDateTime::parse_from_str(&captures["timestamp"], MEMBER_TIMESTAMP_FORMAT).ok()?;
    let separator = captures["sep"].chars().next()?;

    Some(ParsedSubmission {
        assignment: captures["assignment"].to_string(),
        submitter: captures["submitter"].to_string(),
        submitted_at,
        original_filename: captures["filename"].to_string(),
        separator,
    })
}

/// Lower-cases an assignment name and collapses each whitespace run to `_`.
pub fn normalize_assignment(assignment: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&assignment.to_lowercase(), "_")
        .into_owned()
}
