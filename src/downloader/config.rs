//! Configuration structures and defaults for the downloader.
//!
//! [`DownloaderConfig`] is what a [`Downloader`](super::Downloader) is bound
//! to for its whole life: the yt-dlp binary and the defaults applied to runs
//! that do not override them.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable consulted by [`Downloader::from_env`](super::Downloader::from_env).
pub const YTDLP_PATH_ENV: &str = "YTDLP_PATH";

/// Name of the executable searched by [`Downloader::from_path`](super::Downloader::from_path).
pub const YTDLP_BINARY_NAME: &str = "yt-dlp";

/// Configuration structure for the downloader.
#[derive(Clone, Debug, Default)]
pub struct DownloaderConfig {
    /// Path to the yt-dlp executable.
    pub binary: PathBuf,
    /// Default time limit for a run; `None` means no limit.
    pub timeout: Option<Duration>,
}
