//! Download module containing everything describing a single run.
//!
//! # Overview
//!
//! - `options` - The [`Options`] of one invocation
//! - `args` - Translation of [`Options`] into yt-dlp arguments
//! - `output` - The [`RunOutput`] captured from the process
//!
//! # Examples
//!
//! ```rust
//! use video_downloader::download::{build_args, Options};
//!
//! let options = Options::new()
//!     .proxy("socks5://127.0.0.1:9050")
//!     .headers([("Z-Trace", "1"), ("Accept-Language", "en")]);
//!
//! let args = build_args("https://example.com/watch?v=1", &options)?;
//! assert_eq!(args[2], "--proxy");
//! assert_eq!(args[5], "Accept-Language:en");
//! # Ok::<(), video_downloader::Error>(())
//! ```

pub mod args;
pub mod options;
pub mod output;

pub use args::build_args;
pub use options::Options;
pub use output::RunOutput;
