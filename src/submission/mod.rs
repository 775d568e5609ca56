pub mod deadline;
pub mod extractor;
pub mod lateness;
pub mod name_parser;

pub use deadline::{format_lateness, Deadline};
pub use extractor::{ExtractionSummary, SubmissionArchive};
pub use lateness::LatenessRecord;
pub use name_parser::{normalize_assignment, parse_member_name, ParsedSubmission};
