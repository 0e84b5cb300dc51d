use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use video_downloader::ProgressUpdate;

// Common test constants
pub const TEST_URL: &str = "https://example.com/watch?v=dQw4w9WgXcQ";

/// Five lines of yt-dlp output: three progress records and two log lines.
pub const MIXED_OUTPUT: &str = "[youtube] dQw4w9WgXcQ: Downloading webpage\n  \
                                 10.0%|00:30|1.00MiB/s\n\
                                 [download] Destination: video.mp4\n \
                                 55.5%|00:12|2.50MiB/s\n\
                                 100.0%|00:00|3.00MiB/s\n";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

// === Sink Helpers ===

/// A writer whose contents stay readable after it has been moved into `Options`.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "passthrough closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Progress Helpers ===

pub type Collected = Arc<Mutex<Vec<ProgressUpdate>>>;

/// Creates a progress callback recording every update it receives.
pub fn progress_collector() -> (impl FnMut(ProgressUpdate) + Send + 'static, Collected) {
    let collected: Collected = Arc::default();
    let sink = collected.clone();
    let callback = move |update| sink.lock().unwrap().push(update);
    (callback, collected)
}

/// Percentages of the collected updates, in delivery order.
pub fn percents(collected: &Collected) -> Vec<f64> {
    collected.lock().unwrap().iter().map(|u| u.percent).collect()
}

/// Converts built arguments to strings for easy comparison.
pub fn arg_strings(args: Vec<std::ffi::OsString>) -> Vec<String> {
    args.into_iter()
        .map(|a| a.into_string().expect("Argument is not UTF-8"))
        .collect()
}

// === Fake yt-dlp ===

/// A stand-in for yt-dlp whose behaviour is chosen by the URL, its last argument.
#[cfg(unix)]
pub const FAKE_YTDLP_SCRIPT: &str = r#"#!/bin/sh
for url; do :; done
case "$url" in
  fake://progress)
    printf '[youtube] dQw4w9WgXcQ: Downloading webpage\n'
    printf '  10.0%%|00:30|1.00MiB/s\n'
    printf '[download] Destination: video.mp4\n'
    printf ' 55.5%%|00:12|2.50MiB/s\n'
    printf '100.0%%|00:00|3.00MiB/s\n'
    ;;
  fake://partial)
    printf '10.0%%|00:30|1.00MiB/s\n'
    printf '50.0%%|00:05|2.00MiB/s'
    ;;
  fake://args)
    for arg in "$@"; do printf '%s\n' "$arg"; done
    ;;
  fake://pwd)
    pwd
    ;;
  fake://both)
    printf 'to stdout\n'
    printf 'WARNING: to stderr\n' >&2
    ;;
  fake://fail)
    printf '[generic] Extracting URL\n'
    printf '  ERROR: Unsupported URL: fake://fail  \n' >&2
    exit 2
    ;;
  fake://hang)
    printf '5.0%%|01:00|1.00MiB/s\n'
    exec sleep 30
    ;;
  *)
    printf 'ERROR: unknown fake URL %s\n' "$url" >&2
    exit 64
    ;;
esac
"#;

/// Path to the fake yt-dlp, written once per test binary.
#[cfg(unix)]
pub fn fake_ytdlp() -> &'static std::path::Path {
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::sync::OnceLock;

    static SCRIPT: OnceLock<PathBuf> = OnceLock::new();
    SCRIPT.get_or_init(|| {
        let dir = std::env::temp_dir().join(format!(
            "video-downloader-tests-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Failed to create script directory");

        let path = dir.join("yt-dlp");
        std::fs::write(&path, FAKE_YTDLP_SCRIPT).expect("Failed to write fake yt-dlp");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake yt-dlp executable");
        path
    })
}
