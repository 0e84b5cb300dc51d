//! Example downloading a single video with a progress bar
//!
//! Run with `YTDLP_PATH=/path/to/yt-dlp cargo run --example simple -- <URL>`.

use color_eyre::{eyre::eyre, Result};
use console::style;
use tracing_subscriber::EnvFilter;
use video_downloader::progress::{ProgressBarOpts, ProgressDisplay};
use video_downloader::{Downloader, Options};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: simple <URL>"))?;

    // Locate yt-dlp through YTDLP_PATH
    let downloader = Downloader::from_env()?;

    let display = ProgressDisplay::new(ProgressBarOpts::with_pip_style());
    let options = Options::new()
        .output_template("%(title)s.%(ext)s")
        .format("bestvideo+bestaudio/best")
        .on_progress(display.callback());

    let result = downloader.download(&url, options).await;
    display.finish();

    match result {
        Ok(output) => {
            println!("{}", style("Download finished").green().bold());
            print!("{}", output.stdout_lossy());
        }
        Err(failure) => {
            eprintln!("{} {}", style("Download failed:").red().bold(), failure.error());
            if let Some(output) = failure.output() {
                eprint!("{}", output.stderr_lossy());
            }
            return Err(failure.into());
        }
    }

    downloader.close()?;
    Ok(())
}
