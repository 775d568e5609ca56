use crate::error::{CourseworkError, Result};
use crate::roster::reader::RosterRecord;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats one listing line: username padded to 8 columns, two spaces,
/// then the name; numbered lines get a 3-wide, 1-based index in front.
pub fn format_line(index: usize, record: &RosterRecord, numbered: bool) -> String {
    if numbered {
        format!("{:3}  {:<8}  {}", index + 1, record.username, record.full_name)
    } else {
        format!("{:<8}  {}", record.username, record.full_name)
    }
}

/// Writes `records` to `path` in the order given.
pub fn write_list<P: AsRef<Path>>(records: &[RosterRecord], path: P, numbered: bool) -> Result<()> {
    let path = path.as_ref();
    let to_write_error = |source| CourseworkError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    for (index, record) in records.iter().enumerate() {
        writeln!(writer, "{}", format_line(index, record, numbered)).map_err(to_write_error)?;
    }
    writer.flush().map_err(to_write_error)?;

    tracing::debug!(path = %path.display(), lines = records.len(), numbered, "wrote student list");
    Ok(())
}
