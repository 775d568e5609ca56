use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Receives extraction progress. Implementations must not influence what
/// gets extracted; reporting is purely cosmetic.
pub trait ProgressReporter {
    fn start(&self, total_members: u64);
    fn advance(&self, member_name: &str);
    fn finish(&self, files_written: usize);
}

/// Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&self, _total_members: u64) {}
    fn advance(&self, _member_name: &str) {}
    fn finish(&self, _files_written: usize) {}
}

/// Terminal progress bar on stderr. Draws nothing when disabled or when
/// stderr is not a terminal.
pub struct BarProgress {
    bar: ProgressBar,
    started: Instant,
}

impl BarProgress {
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
            bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len:5} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            started: Instant::now(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl ProgressReporter for BarProgress {
    fn start(&self, total_members: u64) {
        self.bar.set_length(total_members);
        self.bar.set_message("Extracting");
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn advance(&self, member_name: &str) {
        self.bar.set_message(member_name.to_string());
        self.bar.inc(1);
    }

    fn finish(&self, files_written: usize) {
        self.bar.finish_with_message(format!(
            "Extracted {} files (completed in {})",
            files_written,
            format_duration(self.started.elapsed())
        ));
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
