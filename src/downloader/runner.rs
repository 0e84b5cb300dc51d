//! Process execution for a single yt-dlp run.
//!
//! The child's two pipes are drained concurrently on the calling task, each
//! into its own [`StreamTee`]. The run races against the cancellation token
//! and the deadline; whichever wins decides how the run ends. The captured
//! output is returned in every case where the process was started.

use crate::download::{build_args, Options, RunOutput};
use crate::error::{CancelCause, DownloadFailure, Error, Result, StreamKind};
use crate::stream::StreamTee;

use futures::future;
use std::future::pending;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Size of the buffer each pipe is read into.
const CHUNK_SIZE: usize = 8 * 1024;

enum Outcome {
    Exited(Result<ExitStatus>),
    Cancelled(CancelCause),
}

/// Run `binary` against `url` and collect its output.
pub(crate) async fn run(
    binary: &Path,
    url: &str,
    options: Options,
    default_timeout: Option<Duration>,
) -> std::result::Result<RunOutput, DownloadFailure> {
    let args = build_args(url, &options)?;

    let Options {
        work_dir,
        stdout,
        stderr,
        progress,
        cancel_token,
        timeout,
        ..
    } = options;
    let deadline = timeout
        .or(default_timeout)
        .and_then(|t| Instant::now().checked_add(t));

    let mut stdout_tee = StreamTee::new(StreamKind::Stdout, stdout);
    if let Some(callback) = progress {
        stdout_tee = stdout_tee.with_progress(callback);
    }
    let mut stderr_tee = StreamTee::new(StreamKind::Stderr, stderr);

    let mut command = Command::new(binary);
    command
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = work_dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
        command.current_dir(dir);
    }

    debug!(
        "Spawning {:?} with {} arguments in {:?}",
        binary,
        args.len(),
        work_dir
    );
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            let error = match cancel_state(cancel_token.as_ref(), deadline) {
                Some(cause) => Error::Cancelled { cause },
                None => Error::Launch { source },
            };
            return Err(DownloadFailure::new(error, RunOutput::default()));
        }
    };

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let outcome = tokio::select! {
        result = drive(&mut child, stdout_pipe, stderr_pipe, &mut stdout_tee, &mut stderr_tee) => {
            Outcome::Exited(result)
        }
        cause = cancelled(cancel_token.as_ref(), deadline) => Outcome::Cancelled(cause),
    };

    let error = match outcome {
        Outcome::Exited(Ok(status)) if status.success() => {
            debug!("yt-dlp finished: {}", status);
            None
        }
        Outcome::Exited(Ok(status)) => {
            debug!("yt-dlp failed: {}", status);
            Some(match cancel_state(cancel_token.as_ref(), deadline) {
                Some(cause) => Error::Cancelled { cause },
                None => Error::ProcessFailed {
                    status,
                    stderr: String::from_utf8_lossy(stderr_tee.buffered())
                        .trim()
                        .to_string(),
                },
            })
        }
        Outcome::Exited(Err(error)) => {
            terminate(&mut child).await;
            Some(match cancel_state(cancel_token.as_ref(), deadline) {
                Some(cause) => Error::Cancelled { cause },
                None => error,
            })
        }
        Outcome::Cancelled(cause) => {
            debug!("Stopping yt-dlp: {}", cause);
            terminate(&mut child).await;
            Some(Error::Cancelled { cause })
        }
    };

    let output = RunOutput::new(stdout_tee.into_buffer(), stderr_tee.into_buffer());
    match error {
        None => Ok(output),
        Some(error) => Err(DownloadFailure::new(error, output)),
    }
}

/// Drain both pipes to the end, then reap the child.
async fn drive<O, E>(
    child: &mut Child,
    stdout: Option<O>,
    stderr: Option<E>,
    stdout_tee: &mut StreamTee,
    stderr_tee: &mut StreamTee,
) -> Result<ExitStatus>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    future::try_join(pump(stdout, stdout_tee), pump(stderr, stderr_tee)).await?;
    Ok(child.wait().await?)
}

async fn pump<R>(reader: Option<R>, tee: &mut StreamTee) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(());
    };

    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let read = reader.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        tee.write_chunk(&chunk[..read])?;
    }
}

/// Resolves once the run must stop.
async fn cancelled(token: Option<&CancellationToken>, deadline: Option<Instant>) -> CancelCause {
    let on_token = async {
        match token {
            Some(token) => token.cancelled().await,
            None => pending().await,
        }
    };
    let on_deadline = async {
        match deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => pending().await,
        }
    };

    tokio::select! {
        () = on_token => CancelCause::Cancelled,
        () = on_deadline => CancelCause::DeadlineExceeded,
    }
}

fn cancel_state(token: Option<&CancellationToken>, deadline: Option<Instant>) -> Option<CancelCause> {
    if token.is_some_and(CancellationToken::is_cancelled) {
        Some(CancelCause::Cancelled)
    } else if deadline.is_some_and(|d| Instant::now() >= d) {
        Some(CancelCause::DeadlineExceeded)
    } else {
        None
    }
}

async fn terminate(child: &mut Child) {
    if let Err(e) = child.kill().await {
        warn!("Failed to kill yt-dlp: {}", e);
    }
}
