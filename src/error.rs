//! Error handling for the video-downloader library.
//!
//! Errors fall into a few families: configuration errors raised before any
//! process is launched, write errors raised while teeing the child's output,
//! and process errors raised once yt-dlp has run. Errors from a run that got
//! as far as launching the child are wrapped in a [`DownloadFailure`], which
//! keeps whatever output was captured before the failure.

use crate::download::RunOutput;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Identifies one of the two output streams of the child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
        }
    }
}

/// Why an invocation was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// The caller's cancellation token fired.
    Cancelled,
    /// The configured timeout elapsed.
    DeadlineExceeded,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::Cancelled => f.write_str("cancellation requested"),
            CancelCause::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Errors that can happen when driving yt-dlp.
#[derive(Error, Debug)]
pub enum Error {
    /// The binary path handed to the builder was empty.
    #[error("binary path is empty")]
    EmptyBinaryPath,

    /// The binary path does not point at anything on disk.
    #[error("stat yt-dlp binary {}", .path.display())]
    BinaryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `yt-dlp` executable could be located on `PATH`.
    #[error("yt-dlp not found in PATH")]
    BinaryNotInPath {
        #[from]
        source: which::Error,
    },

    /// The downloader has no binary to run.
    #[error("yt-dlp binary is not configured")]
    BinaryNotConfigured,

    /// `download` was called with an empty URL.
    #[error("url is required")]
    UrlRequired,

    /// The caller-supplied sink rejected a chunk.
    ///
    /// The chunk was not accumulated in the internal buffer.
    #[error("{stream} passthrough write failed")]
    PassthroughWrite {
        stream: StreamKind,
        #[source]
        source: io::Error,
    },

    /// Appending a chunk to the in-memory buffer failed.
    #[error("{stream} buffer write failed")]
    BufferWrite {
        stream: StreamKind,
        #[source]
        source: io::Error,
    },

    /// The process could not be started.
    #[error("failed to launch yt-dlp")]
    Launch {
        #[source]
        source: io::Error,
    },

    /// yt-dlp ran and exited unsuccessfully.
    ///
    /// `stderr` holds the trimmed captured standard error.
    #[error("yt-dlp failed: {status}\n{stderr}")]
    ProcessFailed { status: ExitStatus, stderr: String },

    /// The run was cancelled before yt-dlp finished.
    #[error("context done: {cause}")]
    Cancelled { cause: CancelCause },

    /// I/O Error.
    ///
    /// Raised when reading the child's pipes or reaping it fails.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` for errors raised before a process was launched.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::EmptyBinaryPath
                | Error::BinaryNotFound { .. }
                | Error::BinaryNotInPath { .. }
                | Error::BinaryNotConfigured
                | Error::UrlRequired
        )
    }

    /// Returns `true` if the run was cancelled or timed out.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

/// Result type alias for operations that can fail with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A failed download together with whatever output was captured.
///
/// `output` is `None` when the run failed before yt-dlp was launched.
#[derive(Error, Debug)]
#[error("download failed: {error}")]
pub struct DownloadFailure {
    #[source]
    error: Error,
    output: Option<RunOutput>,
}

impl DownloadFailure {
    pub(crate) fn new(error: Error, output: RunOutput) -> Self {
        Self {
            error,
            output: Some(output),
        }
    }

    /// Get a reference to the underlying error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Get the output captured before the failure, if the process was launched.
    pub fn output(&self) -> Option<&RunOutput> {
        self.output.as_ref()
    }

    /// Split the failure into its error and captured output.
    pub fn into_parts(self) -> (Error, Option<RunOutput>) {
        (self.error, self.output)
    }
}

impl From<Error> for DownloadFailure {
    fn from(error: Error) -> Self {
        Self {
            error,
            output: None,
        }
    }
}
