//! Terminal rendering of yt-dlp progress.
//!
//! [`ProgressDisplay`] turns the [`ProgressUpdate`]s decoded from yt-dlp's
//! output into an indicatif progress bar.
//!
//! ```rust,no_run
//! use video_downloader::download::Options;
//! use video_downloader::progress::{ProgressBarOpts, ProgressDisplay};
//!
//! let display = ProgressDisplay::new(ProgressBarOpts::default());
//! let options = Options::new().on_progress(display.callback());
//! // ... run the download ...
//! display.finish();
//! ```

use super::{ProgressBarOpts, ProgressUpdate};

use indicatif::ProgressBar;
use std::fmt;

/// Bar positions per percent; keeps one decimal of yt-dlp's percentage.
const STEPS_PER_PERCENT: f64 = 10.0;
const BAR_LENGTH: u64 = 1000;

/// Renders progress updates as a single progress bar.
#[derive(Clone)]
pub struct ProgressDisplay {
    bar: ProgressBar,
    opts: ProgressBarOpts,
}

impl fmt::Debug for ProgressDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressDisplay")
            .field("position", &self.bar.position())
            .field("hidden", &self.bar.is_hidden())
            .field("opts", &self.opts)
            .finish()
    }
}

impl ProgressDisplay {
    /// Create a display styled with `opts`.
    pub fn new(opts: ProgressBarOpts) -> Self {
        Self {
            bar: opts.to_progress_bar(BAR_LENGTH),
            opts,
        }
    }

    /// Create a display that draws nothing.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden())
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Move the bar to the percentage reported by `update`.
    ///
    /// Out of range percentages are clamped to 0 to 100.
    pub fn update(&self, update: &ProgressUpdate) {
        self.bar.set_position(position_for(update.percent));
        self.bar.set_message(format!(
            "{:5.1}% eta {} at {}",
            update.percent, update.eta, update.speed
        ));
    }

    /// Build a callback that forwards updates to this display.
    pub fn callback(&self) -> impl FnMut(ProgressUpdate) + Send + 'static {
        let display = self.clone();
        move |update| display.update(&update)
    }

    /// Finish the bar, clearing it or leaving it on screen based on configuration.
    pub fn finish(&self) {
        if self.opts.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}

fn position_for(percent: f64) -> u64 {
    let steps = (percent.clamp(0.0, 100.0) * STEPS_PER_PERCENT).round();
    // Clamped above, so the cast cannot truncate.
    steps as u64
}
