//! Captured output of a yt-dlp run.

use std::borrow::Cow;

/// Everything yt-dlp wrote to its standard output and standard error.
///
/// Returned on success, and attached to a
/// [`DownloadFailure`](crate::DownloadFailure) when the run failed after the
/// process was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl RunOutput {
    /// Create an output from the captured bytes.
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self { stdout, stderr }
    }

    /// Get the captured standard output.
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Get the captured standard error.
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Standard output decoded as UTF-8, invalid sequences replaced.
    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    /// Standard error decoded as UTF-8, invalid sequences replaced.
    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// Split into `(stdout, stderr)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.stdout, self.stderr)
    }
}
