//! Progress bar styling options.
//!
//! yt-dlp reports progress as a percentage rather than a byte count, so the
//! bar rendered by [`ProgressDisplay`](super::ProgressDisplay) always has a
//! fixed length and the ETA and speed reported by yt-dlp are shown in the
//! message slot.
//!
//! # Examples
//!
//! ```rust
//! use video_downloader::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::new(
//!     Some(ProgressBarOpts::TEMPLATE_PIP.to_string()),
//!     Some(ProgressBarOpts::CHARS_LINE.to_string()),
//!     true,
//!     false,
//! );
//! assert!(opts.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(Self::TEMPLATE_BAR_WITH_MESSAGE.into()),
            progress_chars: Some(Self::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template showing the bar followed by yt-dlp's own figures.
    ///
    /// `███████████████████████▌               58.3% eta 00:12 at 2.10MiB/s`
    pub const TEMPLATE_BAR_WITH_MESSAGE: &'static str = "{bar:40.blue} {msg}";
    /// Template which looks like the Python package installer pip.
    ///
    /// `━━━━━━━━━━━━━━━━━━━━━━━╾──────────────── 58.3% eta 00:12 at 2.10MiB/s`
    pub const TEMPLATE_PIP: &'static str = "{bar:40.green/black} {msg:.green}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a new [`ProgressBarOpts`] which looks like Python pip.
    pub fn with_pip_style() -> Self {
        Self {
            template: Some(Self::TEMPLATE_PIP.into()),
            progress_chars: Some(Self::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Return `false` if the bar is hidden.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to indicatif's default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            match ProgressStyle::default_bar().template(template) {
                Ok(templated) => style = templated,
                Err(e) => warn!("Ignoring invalid progress template {:?}: {}", template, e),
            }
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] of length `len` based on the provided options.
    ///
    /// A disabled bar draws nothing but still tracks `len`.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden());
        }

        ProgressBar::new(len).with_style(self.to_progress_style())
    }
}
