use crate::error::{CourseworkError, Result};
use chrono::{Duration, NaiveDateTime};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d:%H:%M";

static DEADLINE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}:[0-9]{2}:[0-9]{2}$").expect("deadline pattern is valid")
});

/// Submission deadline, given on the command line as `YYYY-MM-DD:hh:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || CourseworkError::InvalidDeadline {
            value: value.to_string(),
        };

        if !DEADLINE_SHAPE.is_match(value) {
            return Err(invalid());
        }

        NaiveDateTime::parse_from_str(value, DEADLINE_FORMAT)
            .map(Deadline)
            .map_err(|_| invalid())
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }

    /// How late a submission made at `submitted_at` is, if at all.
    /// Submissions exactly on the deadline are on time.
    pub fn lateness(&self, submitted_at: NaiveDateTime) -> Option<Duration> {
        let delta = submitted_at - self.0;
        (delta > Duration::zero()).then_some(delta)
    }
}

impl FromStr for Deadline {
    type Err = CourseworkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_FORMAT))
    }
}

/// Renders an elapsed time as `2d 3h 0m 5s`, dropping leading zero units.
pub fn format_lateness(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
