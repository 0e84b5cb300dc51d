//! video-downloader drives an external [yt-dlp](https://github.com/yt-dlp/yt-dlp)
//! binary: it builds the command line, captures everything the process
//! prints, optionally mirrors that output live, and decodes yt-dlp's
//! progress lines into structured updates.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use video_downloader::{Downloader, Options};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = Downloader::new("/usr/local/bin/yt-dlp")?;
//! let options = Options::new()
//!     .format("bestvideo+bestaudio/best")
//!     .on_progress(|update| println!("{:.1}% eta {} at {}", update.percent, update.eta, update.speed));
//!
//! let output = downloader.download("https://example.com/watch?v=1", options).await?;
//! println!("{}", output.stdout_lossy());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`downloader`] - The [`Downloader`], its builder and the process runner
//! - [`download`] - Per-run [`Options`], argument building and [`RunOutput`]
//! - [`stream`] - The [`StreamTee`](stream::StreamTee) output multiplexer
//! - [`progress`] - Progress record decoding and terminal display
//! - [`error`] - Centralized error handling with the [`Error`] enum

pub mod download;
pub mod downloader;
pub mod error;
pub mod progress;
pub mod stream;

pub use download::{build_args, Options, RunOutput};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{CancelCause, DownloadFailure, Error, Result, StreamKind};
pub use progress::{ProgressBarOpts, ProgressDisplay, ProgressUpdate};
