//! Progress reporting abstractions for supervised encodes.
//!
//! The supervisor talks to a [`ProgressSink`] instead of a concrete
//! terminal widget, so consumers can render a bar, collect updates in
//! tests, or ignore progress entirely. One task exists per supervised run:
//! `begin` once, any number of `advance`/`advance_fraction` calls, then
//! `finish` when the process exits.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Scale used to position the bar when the total frame count is unknown.
const FRACTION_SCALE: u64 = 1000;

/// Bar template when the total frame count is known.
const FRAME_TEMPLATE: &str =
    "{spinner:.green} {msg} [{bar:40.cyan/blue}] {percent}% ({elapsed} < {eta}) {pos}/{len}";

/// Bar template when only a completion fraction is available.
const FRACTION_TEMPLATE: &str =
    "{spinner:.green} {msg} [{bar:40.cyan/blue}] {percent}% ({elapsed})";

/// Receives progress updates from a supervised encode.
pub trait ProgressSink: Send + Sync {
    /// Starts the run's single task. `total` is the expected number of
    /// frames when the prober could determine one.
    fn begin(&self, label: &str, total: Option<u64>);

    /// Reports completed frames. Only called when a total is known.
    fn advance(&self, completed: u64);

    /// Reports the raw completion fraction (0.0 to 1.0). Only called when
    /// no total is known.
    fn advance_fraction(&self, fraction: f64);

    /// Marks the task finished.
    fn finish(&self);
}

/// No-op sink for quiet or non-interactive runs.
#[derive(Debug, Clone, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn begin(&self, _label: &str, _total: Option<u64>) {}

    fn advance(&self, _completed: u64) {}

    fn advance_fraction(&self, _fraction: f64) {}

    fn finish(&self) {}
}

/// Terminal progress bar sink.
///
/// Renders a spinner, the task label, a bar with percentage, elapsed and
/// remaining time, and a frames-completed count when the total is known.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    /// Creates a sink whose bar appears on the first `begin` call.
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn begin(&self, label: &str, total: Option<u64>) {
        let template = if total.is_some() {
            FRAME_TEMPLATE
        } else {
            FRACTION_TEMPLATE
        };
        self.bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .unwrap()
                .progress_chars("█▓▒░ "),
        );
        self.bar.set_length(total.unwrap_or(FRACTION_SCALE));
        self.bar.set_message(label.to_string());
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn advance(&self, completed: u64) {
        self.bar.set_position(completed);
    }

    fn advance_fraction(&self, fraction: f64) {
        let scaled = (fraction.clamp(0.0, 1.0) * FRACTION_SCALE as f64) as u64;
        self.bar.set_position(scaled);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
