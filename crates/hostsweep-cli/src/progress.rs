//! indicatif progress bar driven by sweep callbacks.

use indicatif::{ProgressBar, ProgressStyle};

use hostsweep_core::sweep::SweepProgress;
use hostsweep_core::ProbeResult;

/// CLI progress handler using indicatif. The bar is reset for each swept range.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Progress handler that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl SweepProgress for CliProgress {
    fn on_start(&self, total: usize) {
        self.bar.reset();
        self.bar.set_length(total as u64);
    }

    fn on_result(&self, result: &ProbeResult) {
        self.bar.set_message(result.target.to_string());
        self.bar.inc(1);
    }

    fn on_finish(&self) {
        self.bar.finish_and_clear();
    }
}
