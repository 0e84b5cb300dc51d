//! Progress module containing progress decoding and display.
//!
//! When a progress callback is configured, yt-dlp is asked to print one
//! `percent%|eta|speed` record per line on its standard output. This module
//! decodes those records and can render them in the terminal.
//!
//! # Overview
//!
//! - `update` - The [`ProgressUpdate`] record and its parser
//! - `decoder` - The [`LineDecoder`] reassembling lines out of output chunks
//! - `style` - Progress bar styling options
//! - `display` - Progress bar rendering of updates
//!
//! # Examples
//!
//! ## Collecting Updates Over a Channel
//!
//! ```rust
//! use video_downloader::download::Options;
//!
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//! let options = Options::new().progress_sender(tx);
//! // ... run the download, then drain `rx` ...
//! # drop(options);
//! # assert!(rx.try_recv().is_err());
//! ```

pub(crate) mod decoder;
pub(crate) mod display;
pub(crate) mod style;
pub(crate) mod update;

pub use decoder::{LineDecoder, ProgressCallback};
pub use display::ProgressDisplay;
pub use style::ProgressBarOpts;
pub use update::{ProgressUpdate, PROGRESS_TEMPLATE};
