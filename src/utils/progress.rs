use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    silent: bool,
}

impl ProgressReporter {
    pub fn new(total: u64, message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
            silent: false,
        }
    }

    /// Reporter that only prints plain lines, for single-file runs
    pub fn plain(silent: bool) -> Self {
        Self {
            progress_bar: None,
            silent,
        }
    }

    pub fn silent() -> Self {
        Self::plain(true)
    }

    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    /// Print a line to stdout without tearing the progress bar
    pub fn println(&self, message: &str) {
        if !self.silent {
            if let Some(ref pb) = self.progress_bar {
                pb.suspend(|| println!("{}", message));
            } else {
                println!("{}", message);
            }
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_has_no_bar() {
        let reporter = ProgressReporter::new(10, "Converting", true);
        assert!(reporter.progress_bar.is_none());
        reporter.increment(1);
        reporter.println("not shown");
    }

    #[test]
    fn test_bar_tracks_position() {
        let reporter = ProgressReporter::new(3, "Converting", false);
        reporter.increment(2);
        let position = reporter.progress_bar.as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));
    }
}
