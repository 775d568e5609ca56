use std::path::PathBuf;

pub const DEFAULT_LATE_FILE: &str = "late.txt";

/// Settings for one extraction run. There is no config file; everything
/// comes from the command line.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub archive_path: PathBuf,
    pub deadline: Option<String>,
    pub late_file: PathBuf,
    pub output_root: PathBuf,
    pub verbose: u8,
    pub show_progress: bool,
}

impl ExtractConfig {
    pub fn new<P: Into<PathBuf>>(archive_path: P) -> Self {
        Self {
            archive_path: archive_path.into(),
            deadline: None,
            late_file: PathBuf::from(DEFAULT_LATE_FILE),
            output_root: PathBuf::from("."),
            verbose: 0,
            show_progress: false,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<String>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_late_file<P: Into<PathBuf>>(mut self, late_file: P) -> Self {
        self.late_file = late_file.into();
        self
    }

    pub fn with_output_root<P: Into<PathBuf>>(mut self, output_root: P) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Where the lateness report lands: relative paths resolve against the
    /// output root.
    pub fn late_file_path(&self) -> PathBuf {
        self.output_root.join(&self.late_file)
    }
}

/// Settings for one run of the student list generator.
#[derive(Debug, Clone)]
pub struct ListsConfig {
    pub csv_path: PathBuf,
    pub names_path: PathBuf,
    pub usernames_path: PathBuf,
    pub numbered: bool,
}
