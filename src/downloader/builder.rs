//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use video_downloader::downloader::DownloaderBuilder;
//!
//! # fn example() -> Result<(), video_downloader::Error> {
//! let downloader = DownloaderBuilder::new("/usr/local/bin/yt-dlp")
//!     .timeout(Duration::from_secs(3600))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::error::{Error, Result};

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
#[derive(Debug, Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder for the yt-dlp executable at `binary`.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self::default().binary(binary)
    }

    /// Sets the path to the yt-dlp executable.
    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.config.binary = binary.into();
        self
    }

    /// Set the default time limit of a run.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    ///
    /// Fails if the binary path is empty or does not exist.
    pub fn build(self) -> Result<Downloader> {
        let binary = &self.config.binary;
        if binary.as_os_str().is_empty() {
            return Err(Error::EmptyBinaryPath);
        }

        fs::metadata(binary).map_err(|source| Error::BinaryNotFound {
            path: binary.clone(),
            source,
        })?;

        Ok(Downloader::from_config(self.config))
    }
}
