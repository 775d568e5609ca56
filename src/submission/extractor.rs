use crate::error::{CourseworkError, Result};
use crate::submission::deadline::Deadline;
use crate::submission::lateness::LatenessRecord;
use crate::submission::name_parser::{parse_member_name, ParsedSubmission};
use crate::ui::ProgressReporter;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use zip::ZipArchive;

/// What one pass over a submissions archive produced.
#[derive(Debug, Clone, Default)]
pub struct ExtractionSummary {
    pub submitters: BTreeSet<String>,
    pub lateness: LatenessRecord,
    pub files_written: usize,
    pub members_skipped: usize,
}

/// A bulk submissions archive opened for extraction.
pub struct SubmissionArchive {
    path: PathBuf,
    archive: ZipArchive<fs::File>,
    deadline: Option<Deadline>,
}

impl SubmissionArchive {
    /// Opens `path` as a Zip archive and parses the optional deadline
    /// (`YYYY-MM-DD:hh:mm`). Both are checked before anything is extracted.
    pub fn open<P: AsRef<Path>>(path: P, deadline: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| CourseworkError::InvalidArchive {
            path: path.to_path_buf(),
            reason,
        };

        let file = fs::File::open(path).map_err(|e| invalid(e.to_string()))?;
        let archive = ZipArchive::new(file).map_err(|e| invalid(e.to_string()))?;
        let deadline = deadline.map(Deadline::parse).transpose()?;

        tracing::info!(
            archive = %path.display(),
            members = archive.len(),
            deadline = ?deadline.map(|d| d.to_string()),
            "opened submissions archive"
        );

        Ok(Self {
            path: path.to_path_buf(),
            archive,
            deadline,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Extracts every submission entry below `output_root` as
    /// `<assignment>/<submitter>/<filename>`, overwriting existing files.
    ///
    /// Members that are not submission entries are skipped. The first
    /// read or write failure aborts the run; files already written stay.
    pub fn extract(
        &mut self,
        output_root: &Path,
        progress: &dyn ProgressReporter,
    ) -> Result<ExtractionSummary> {
        let mut summary = ExtractionSummary::default();
        progress.start(self.archive.len() as u64);

        for index in 0..self.archive.len() {
            let mut entry = self
                .archive
                .by_index(index)
                .map_err(|source| CourseworkError::ArchiveRead {
                    member: format!("#{}", index),
                    source,
                })?;
            let name = entry.name().to_string();
            progress.advance(&name);

            if entry.is_dir() {
                summary.members_skipped += 1;
                continue;
            }

            let submission = match parse_member_name(&name) {
                Some(submission) => submission,
                None => {
                    tracing::debug!(member = %name, "skipping non-submission member");
                    summary.members_skipped += 1;
                    continue;
                }
            };

            let mut data = Vec::new();
            entry
                .read_to_end(&mut data)
                .map_err(|e| CourseworkError::ArchiveRead {
                    member: name.clone(),
                    source: e.into(),
                })?;

            let dest = write_submission(output_root, &name, &submission, &data)?;
            tracing::debug!(member = %name, dest = %dest.display(), bytes = data.len(), "extracted");

            summary.files_written += 1;
            summary.submitters.insert(submission.submitter.clone());

            if let Some(lateness) = self
                .deadline
                .and_then(|deadline| deadline.lateness(submission.submitted_at))
            {
                tracing::info!(submitter = %submission.submitter, seconds = lateness.num_seconds(), "late submission");
                summary.lateness.record(&submission.submitter, lateness);
            }
        }

        progress.finish(summary.files_written);
        Ok(summary)
    }
}

fn write_submission(
    output_root: &Path,
    member: &str,
    submission: &ParsedSubmission,
    data: &[u8],
) -> Result<PathBuf> {
    let relative = submission
        .destination_dir()
        .join(&submission.original_filename);

    if !stays_inside(&relative) {
        tracing::warn!(member, "rejecting member with unsafe path");
        return Err(CourseworkError::UnsafeMemberPath {
            member: member.to_string(),
        });
    }

    let dest = output_root.join(&relative);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| CourseworkError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&dest, data).map_err(|source| CourseworkError::Write {
        path: dest.clone(),
        source,
    })?;

    Ok(dest)
}

// Only plain relative components; no `..`, root or drive prefix.
fn stays_inside(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
