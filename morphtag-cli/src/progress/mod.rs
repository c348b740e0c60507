//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for long-running enumerations
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Show a spinner while a blocking task runs
    pub fn start_spinner(&mut self, message: impl Into<String>) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish progress reporting
    pub fn finish(&self, message: impl Into<String>) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
            log::info!("{}", message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start_spinner("enumerating");
        assert!(reporter.progress_bar.is_none());
        reporter.finish("done");
    }

    #[test]
    fn test_spinner_lifecycle() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start_spinner("enumerating");
        assert!(reporter.progress_bar.is_some());
        reporter.finish("done");
    }
}
