//! Tests for the download module functionality.
//!
//! This file covers the public surface of per-run options, the yt-dlp
//! argument list built from them and the captured run output.

use std::ffi::OsString;
use std::time::Duration;
use video_downloader::{build_args, DownloadFailure, Error, Options, RunOutput};

mod common;
use common::helpers::*;

#[test]
fn test_url_is_always_last() {
    let options = Options::new()
        .format("best")
        .extra_arg("--")
        .header("Referer", "https://example.com/");

    let args = arg_strings(build_args(TEST_URL, &options).unwrap());

    assert_eq!(args.first().map(String::as_str), Some("--newline"));
    assert_eq!(args.last().map(String::as_str), Some(TEST_URL));
}

#[test]
fn test_header_order_independent_of_insertion() {
    let forward = Options::new().header("A", "1").header("Z", "2");
    let backward = Options::new().header("Z", "2").header("A", "1");

    assert_eq!(
        build_args(TEST_URL, &forward).unwrap(),
        build_args(TEST_URL, &backward).unwrap()
    );
}

#[test]
fn test_repeated_header_keeps_last_value() {
    let options = Options::new()
        .header("User-Agent", "first")
        .header("User-Agent", "second");

    let args = arg_strings(build_args(TEST_URL, &options).unwrap());

    assert!(args.contains(&"User-Agent:second".to_string()));
    assert!(!args.contains(&"User-Agent:first".to_string()));
}

#[test]
fn test_extra_args_passed_verbatim() {
    let options = Options::new().extra_args([
        OsString::from("--limit-rate"),
        OsString::from("  50K "),
    ]);

    let args = build_args(TEST_URL, &options).unwrap();

    assert_eq!(args[2], "--limit-rate");
    assert_eq!(args[3], "  50K ");
}

#[test]
fn test_progress_switches_flags() {
    let quiet = arg_strings(build_args(TEST_URL, &Options::new()).unwrap());
    assert!(quiet.contains(&"--no-progress".to_string()));
    assert!(!quiet.contains(&"--progress-template".to_string()));

    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let loud = arg_strings(build_args(TEST_URL, &Options::new().progress_sender(tx)).unwrap());
    assert!(loud.contains(&"--progress-template".to_string()));
    assert!(!loud.contains(&"--no-progress".to_string()));
}

#[test]
fn test_empty_url_is_config_error() {
    let err = build_args("", &Options::new().format("best")).unwrap_err();

    assert!(matches!(err, Error::UrlRequired));
    assert!(err.is_config());
    assert_eq!(err.to_string(), "url is required");
}

#[test]
fn test_options_getters_and_debug() {
    let temp_dir = create_temp_dir();
    let options = Options::new()
        .work_dir(temp_dir.path())
        .timeout(Duration::from_secs(30))
        .stdout(SharedBuffer::default());

    assert_eq!(options.get_work_dir(), Some(temp_dir.path()));
    assert_eq!(options.get_timeout(), Some(Duration::from_secs(30)));
    assert!(!options.has_progress());

    let debug = format!("{:?}", options);
    assert!(debug.contains("stdout: true"));
    assert!(debug.contains("progress: false"));
}

#[test]
fn test_run_output_accessors() {
    let output = RunOutput::new(b"line\n".to_vec(), b"\xffwarn".to_vec());

    assert_eq!(output.stdout(), b"line\n");
    assert_eq!(output.stdout_lossy(), "line\n");
    assert_eq!(output.stderr_lossy(), "\u{fffd}warn");

    let (stdout, stderr) = output.into_parts();
    assert_eq!(stdout, b"line\n");
    assert_eq!(stderr, b"\xffwarn");
}

#[test]
fn test_failure_without_output() {
    let failure = DownloadFailure::from(Error::UrlRequired);

    assert!(failure.output().is_none());
    assert_eq!(failure.to_string(), "download failed: url is required");

    let (error, output) = failure.into_parts();
    assert!(matches!(error, Error::UrlRequired));
    assert!(output.is_none());
}

#[test]
fn test_error_messages() {
    let err = Error::Cancelled {
        cause: video_downloader::CancelCause::DeadlineExceeded,
    };
    assert_eq!(err.to_string(), "context done: deadline exceeded");
    assert!(err.is_cancelled());
    assert!(!err.is_config());

    let err = Error::PassthroughWrite {
        stream: video_downloader::StreamKind::Stderr,
        source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
    };
    assert_eq!(err.to_string(), "stderr passthrough write failed");
}
