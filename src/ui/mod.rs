pub mod progress;
pub mod output;

pub use progress::{BarProgress, NoProgress, ProgressReporter};
pub use output::{OutputFormatter, OutputMode};
