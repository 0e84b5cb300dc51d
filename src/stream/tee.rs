//! Fan-out of one child output stream.
//!
//! Every chunk read from a pipe goes, in order, to:
//!
//! 1. the caller's passthrough sink, if any,
//! 2. the in-memory buffer returned once the process ends,
//! 3. the progress [`LineDecoder`], if one is attached.
//!
//! A chunk the passthrough sink rejects never reaches the buffer.

use crate::error::{Error, Result, StreamKind};
use crate::progress::{LineDecoder, ProgressCallback};

use std::fmt;
use std::io::{self, Write};

/// Caller-supplied destination for live output.
pub type Passthrough = Box<dyn Write + Send>;

/// Tees one output stream into a passthrough sink and a capture buffer.
pub struct StreamTee {
    kind: StreamKind,
    passthrough: Option<Passthrough>,
    buffer: Vec<u8>,
    decoder: Option<LineDecoder>,
}

impl fmt::Debug for StreamTee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTee")
            .field("kind", &self.kind)
            .field("passthrough", &self.passthrough.is_some())
            .field("buffered", &self.buffer.len())
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl StreamTee {
    /// Create a tee for `kind`, optionally mirroring to `passthrough`.
    pub fn new(kind: StreamKind, passthrough: Option<Passthrough>) -> Self {
        Self {
            kind,
            passthrough,
            buffer: Vec::new(),
            decoder: None,
        }
    }

    /// Decode progress records out of this stream and report them to `callback`.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.decoder = Some(LineDecoder::new(callback));
        self
    }

    /// Get the stream this tee handles.
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Bytes captured so far.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the tee, returning everything it captured.
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    /// Push one chunk through the tee.
    ///
    /// Returns the chunk length on success. A failed write is not retried.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<usize> {
        if let Some(passthrough) = self.passthrough.as_mut() {
            passthrough
                .write_all(chunk)
                .map_err(|source| Error::PassthroughWrite {
                    stream: self.kind,
                    source,
                })?;
        }

        self.buffer
            .write_all(chunk)
            .map_err(|source| Error::BufferWrite {
                stream: self.kind,
                source,
            })?;

        if let Some(decoder) = self.decoder.as_mut() {
            decoder.feed(chunk);
        }

        Ok(chunk.len())
    }
}

impl Write for StreamTee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_chunk(buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.passthrough.as_mut() {
            Some(passthrough) => passthrough.flush(),
            None => Ok(()),
        }
    }
}
