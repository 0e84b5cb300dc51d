//! Stream module containing the output multiplexer.
//!
//! Each of yt-dlp's output streams is drained into a [`StreamTee`], which
//! mirrors the bytes to an optional caller sink, keeps a full copy for the
//! final [`RunOutput`](crate::download::RunOutput) and, for standard output,
//! decodes progress records.
//!
//! # Examples
//!
//! ```rust
//! use video_downloader::stream::StreamTee;
//! use video_downloader::StreamKind;
//!
//! let mut tee = StreamTee::new(StreamKind::Stdout, None)
//!     .with_progress(Box::new(|update| println!("{:.1}%", update.percent)));
//!
//! tee.write_chunk(b"[download] Destination: clip.mp4\n33.3%|00:02|")?;
//! tee.write_chunk(b"4.00MiB/s\n")?;
//! assert_eq!(tee.buffered().len(), 55);
//! # Ok::<(), video_downloader::Error>(())
//! ```

pub mod tee;

pub use tee::{Passthrough, StreamTee};
