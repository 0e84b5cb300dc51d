//! Downloader module containing the yt-dlp wrapper, its builder and configuration.
//!
//! # Overview
//!
//! - `downloader` - The [`Downloader`] and its `download` entry point
//! - `builder` - [`DownloaderBuilder`] validating the binary before use
//! - `config` - Configuration structure and environment names
//! - `runner` - Process execution, output draining and cancellation
//!
//! # Examples
//!
//! ## Locating yt-dlp
//!
//! ```rust,no_run
//! use video_downloader::downloader::Downloader;
//!
//! # fn example() -> Result<(), video_downloader::Error> {
//! // From the YTDLP_PATH environment variable...
//! let downloader = Downloader::from_env()?;
//! // ...or from PATH.
//! let downloader = Downloader::from_path()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancelling a Run
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use video_downloader::download::Options;
//! use video_downloader::downloader::Downloader;
//!
//! # async fn example(downloader: Downloader) {
//! let token = CancellationToken::new();
//! let options = Options::new().cancel_token(token.clone());
//!
//! tokio::spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     token.cancel();
//! });
//!
//! let failure = downloader
//!     .download("https://example.com/watch?v=1", options)
//!     .await
//!     .unwrap_err();
//! assert!(failure.error().is_cancelled());
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
mod runner;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, YTDLP_BINARY_NAME, YTDLP_PATH_ENV};
pub use downloader::Downloader;
