//! Incremental line decoder for yt-dlp's standard output.
//!
//! Output arrives in chunks that do not respect line boundaries. The
//! [`LineDecoder`] keeps the unterminated tail of the stream between chunks,
//! and every time a `\n` completes a line it tries to decode that line as a
//! [`ProgressUpdate`]. Lines that are not progress records are dropped.
//!
//! A trailing line that never receives its `\n` is never decoded.

use super::ProgressUpdate;

use std::fmt;

/// Callback invoked for each decoded progress update.
pub type ProgressCallback = Box<dyn FnMut(ProgressUpdate) + Send>;

/// Splits a byte stream into lines and reports the progress records found.
pub struct LineDecoder {
    pending: Vec<u8>,
    callback: ProgressCallback,
}

impl fmt::Debug for LineDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineDecoder")
            .field("pending", &String::from_utf8_lossy(&self.pending))
            .finish_non_exhaustive()
    }
}

impl LineDecoder {
    /// Create a decoder reporting to `callback`.
    pub fn new(callback: ProgressCallback) -> Self {
        Self {
            pending: Vec::new(),
            callback,
        }
    }

    /// Feed a chunk of output.
    ///
    /// Every line completed by this chunk is decoded and, when it is a
    /// progress record, delivered before the next line is looked at.
    pub fn feed(&mut self, chunk: &[u8]) {
        for piece in chunk.split_inclusive(|b| *b == b'\n') {
            self.pending.extend_from_slice(piece);

            if piece.last() == Some(&b'\n') {
                self.complete_line();
            }
        }
    }

    /// Bytes received since the last line terminator.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    fn complete_line(&mut self) {
        let line = String::from_utf8_lossy(&self.pending);
        if let Some(update) = ProgressUpdate::parse(&line) {
            (self.callback)(update);
        }
        self.pending.clear();
    }
}
