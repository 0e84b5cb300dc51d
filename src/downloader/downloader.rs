//! Core downloader implementation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use video_downloader::downloader::Downloader;
//! use video_downloader::download::Options;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new("/usr/local/bin/yt-dlp")?;
//!
//! let options = Options::new()
//!     .output_template("%(title)s.%(ext)s")
//!     .on_progress(|update| println!("{:.1}%", update.percent));
//!
//! match downloader.download("https://example.com/watch?v=1", options).await {
//!     Ok(output) => println!("{}", output.stdout_lossy()),
//!     Err(failure) => {
//!         eprintln!("{}", failure.error());
//!         if let Some(output) = failure.output() {
//!             eprintln!("{}", output.stderr_lossy());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::builder::DownloaderBuilder;
use super::config::{DownloaderConfig, YTDLP_BINARY_NAME, YTDLP_PATH_ENV};
use super::runner;
use crate::download::{Options, RunOutput};
use crate::error::{DownloadFailure, Error, Result};

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Wraps an external yt-dlp binary.
///
/// A downloader is bound to its binary when it is built and holds no other
/// resources: it can be cloned freely and shared between tasks.
#[derive(Clone, Debug)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Downloader {
    pub(crate) fn from_config(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Creates a downloader for the yt-dlp binary at `binary`.
    ///
    /// Fails if the path is empty or nothing exists there.
    pub fn new(binary: impl Into<PathBuf>) -> Result<Self> {
        DownloaderBuilder::new(binary).build()
    }

    /// Same as [`Downloader::new`].
    pub fn with_binary(binary: impl Into<PathBuf>) -> Result<Self> {
        Self::new(binary)
    }

    /// Creates a downloader for the binary named by the `YTDLP_PATH` environment variable.
    pub fn from_env() -> Result<Self> {
        match env::var_os(YTDLP_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Err(Error::BinaryNotConfigured),
        }
    }

    /// Creates a downloader for the first `yt-dlp` found on `PATH`.
    pub fn from_path() -> Result<Self> {
        let binary = which::which(YTDLP_BINARY_NAME)?;
        Self::new(binary)
    }

    /// Gets the path of the yt-dlp binary.
    pub fn binary(&self) -> &Path {
        &self.config.binary
    }

    /// Gets the default time limit of a run.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Release the downloader.
    ///
    /// Nothing needs cleaning up; this exists so callers can end the
    /// downloader's life explicitly.
    pub fn close(self) -> Result<()> {
        Ok(())
    }

    /// Runs yt-dlp for `url`.
    ///
    /// Output is captured and also streamed to the sinks set in `options`.
    /// On failure after yt-dlp was started, the returned [`DownloadFailure`]
    /// carries the output captured so far.
    pub async fn download(
        &self,
        url: &str,
        options: Options,
    ) -> std::result::Result<RunOutput, DownloadFailure> {
        if url.is_empty() {
            return Err(Error::UrlRequired.into());
        }

        if self.config.binary.as_os_str().is_empty() {
            return Err(Error::BinaryNotConfigured.into());
        }

        runner::run(&self.config.binary, url, options, self.config.timeout).await
    }
}
