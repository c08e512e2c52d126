//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Live line counter on standard error
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; a quiet reporter draws nothing
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {pos} lines ({per_sec})")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Record the number of lines written so far
    pub fn update(&self, lines: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(lines);
        }
    }

    /// Remove the spinner
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
