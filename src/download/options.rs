//! Per-invocation options.
//!
//! [`Options`] gathers everything that varies between two runs of yt-dlp:
//! the flags that end up on its command line, where it runs, where its
//! output is mirrored and how progress and cancellation are reported.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use video_downloader::download::Options;
//!
//! let options = Options::new()
//!     .output_template("%(title)s.%(ext)s")
//!     .format("bestvideo+bestaudio/best")
//!     .header("Referer", "https://example.com/")
//!     .timeout(Duration::from_secs(600))
//!     .on_progress(|update| println!("{:.1}% eta {}", update.percent, update.eta));
//!
//! assert!(options.has_progress());
//! ```

use crate::progress::{ProgressCallback, ProgressUpdate};
use crate::stream::Passthrough;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Options controlling a single yt-dlp invocation.
#[derive(Default)]
pub struct Options {
    /// Output filename template, e.g. `%(title)s.%(ext)s`.
    pub(crate) output_template: Option<String>,
    /// Format selector, e.g. `bestvideo+bestaudio/best`.
    pub(crate) format: Option<String>,
    /// Proxy URL, e.g. `socks5://127.0.0.1:9050`.
    pub(crate) proxy: Option<String>,
    /// Netscape formatted cookies file.
    pub(crate) cookies_file: Option<PathBuf>,
    /// Extra HTTP headers, kept sorted by name.
    pub(crate) headers: BTreeMap<String, String>,
    /// Raw arguments placed right before the URL.
    pub(crate) extra_args: Vec<OsString>,
    /// Working directory of the child process.
    pub(crate) work_dir: Option<PathBuf>,
    /// Live copy of standard output.
    pub(crate) stdout: Option<Passthrough>,
    /// Live copy of standard error.
    pub(crate) stderr: Option<Passthrough>,
    /// Progress callback.
    pub(crate) progress: Option<ProgressCallback>,
    /// External cancellation signal.
    pub(crate) cancel_token: Option<CancellationToken>,
    /// Time limit for the whole invocation.
    pub(crate) timeout: Option<Duration>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("output_template", &self.output_template)
            .field("format", &self.format)
            .field("proxy", &self.proxy)
            .field("cookies_file", &self.cookies_file)
            .field("headers", &self.headers)
            .field("extra_args", &self.extra_args)
            .field("work_dir", &self.work_dir)
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .field("progress", &self.progress.is_some())
            .field("cancel_token", &self.cancel_token)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Options {
    /// Creates options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output filename template (`-o`).
    pub fn output_template(mut self, template: impl Into<String>) -> Self {
        self.output_template = Some(template.into());
        self
    }

    /// Set the format selector (`-f`).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the proxy (`--proxy`).
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the cookies file (`--cookies`).
    pub fn cookies_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookies_file = Some(path.into());
        self
    }

    /// Add one HTTP header (`--add-header`).
    ///
    /// Setting the same name twice keeps the last value. Headers whose value
    /// is blank are not passed to yt-dlp.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add several HTTP headers.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Append one raw argument, passed to yt-dlp right before the URL.
    pub fn extra_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Append several raw arguments.
    pub fn extra_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run yt-dlp in `dir`.
    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Mirror yt-dlp's standard output to `sink` as it arrives.
    pub fn stdout<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.stdout = Some(Box::new(sink));
        self
    }

    /// Mirror yt-dlp's standard error to `sink` as it arrives.
    pub fn stderr<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.stderr = Some(Box::new(sink));
        self
    }

    /// Report progress to `callback`.
    ///
    /// The callback runs on the task draining yt-dlp's standard output, one
    /// update at a time and in output order. A slow callback slows draining.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ProgressUpdate) + Send + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Report progress over a channel.
    ///
    /// Updates are dropped once the receiving half is closed.
    pub fn progress_sender(self, sender: UnboundedSender<ProgressUpdate>) -> Self {
        self.on_progress(move |update| {
            let _ = sender.send(update);
        })
    }

    /// Kill yt-dlp and fail the download when `token` is cancelled.
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Kill yt-dlp and fail the download after `timeout`.
    ///
    /// Overrides the downloader's default timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Gets whether a progress callback is configured.
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }

    /// Gets the working directory, if set.
    pub fn get_work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Gets the per-run timeout, if set.
    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
