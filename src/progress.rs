//! Terminal progress reporting using indicatif.
//!
//! Progress is a cosmetic side channel: the generated SQL is identical with
//! or without it. Bars draw to stderr and are suppressed entirely when the
//! reporter is disabled or stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};

/// Records below this count convert too fast for a bar to be useful
pub const PROGRESS_THRESHOLD: usize = 100;

#[derive(Debug, Clone)]
pub struct ProgressReporter {
    enabled: bool,
}

impl ProgressReporter {
    /// Create a new reporter. If enabled=false, no bars are created.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && atty::is(atty::Stream::Stderr),
        }
    }

    /// Reporter that never draws anything
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Bar for per-record conversion progress. Skipped for small inputs.
    pub fn record_bar(&self, total: usize) -> Option<ProgressBar> {
        if !self.enabled || total <= PROGRESS_THRESHOLD {
            return None;
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(counter_style());
        bar.set_prefix("Converting records");
        Some(bar)
    }

    /// Bar for per-batch progress in batch mode
    pub fn batch_bar(&self, total: usize) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(counter_style());
        bar.set_prefix("Writing batches");
        Some(bar)
    }
}

fn counter_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:20} [{bar:50}] {pos}/{len} ({percent:>3}%) {elapsed} | ETA: {eta}",
    )
    .unwrap()
    .progress_chars("█░")
}

/// Advance a bar if one is active
pub fn tick(bar: &Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.inc(1);
    }
}

/// Finish and clear a bar if one is active
pub fn finish(bar: &Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}
