//! Progress records emitted by yt-dlp.
//!
//! yt-dlp is started with a progress template that prints one record per
//! line in the form `percent%|eta|speed`, for instance
//! `  42.5%|00:10|1.20MiB/s`. [`ProgressUpdate::parse`] turns such a line
//! into a structured value.
//!
//! ```rust
//! use video_downloader::progress::ProgressUpdate;
//!
//! let update = ProgressUpdate::parse(" 42.5%| 00:10 | 1.2MiB/s").unwrap();
//! assert_eq!(update.percent, 42.5);
//! assert_eq!(update.eta, "00:10");
//! assert_eq!(update.speed, "1.2MiB/s");
//!
//! // yt-dlp prints N/A until it knows the total size.
//! assert!(ProgressUpdate::parse("N/A%|Unknown|Unknown").is_none());
//! ```

/// Template handed to `--progress-template` so that yt-dlp prints records
/// [`ProgressUpdate::parse`] understands.
pub const PROGRESS_TEMPLATE: &str =
    "%(progress._percent_str)s|%(progress._eta_str)s|%(progress._speed_str)s";

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 3;
const NOT_AVAILABLE: &str = "N/A";

/// A single progress update emitted by yt-dlp during a download.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Completion percentage, on a 0 to 100 scale.
    pub percent: f64,
    /// Estimated time remaining, as printed by yt-dlp (e.g. `00:10`).
    pub eta: String,
    /// Current speed, as printed by yt-dlp (e.g. `1.20MiB/s`).
    pub speed: String,
    /// The trimmed line the update was decoded from.
    pub raw: String,
}

impl ProgressUpdate {
    /// Decode a progress record.
    ///
    /// Returns `None` for anything that is not a complete record: lines with
    /// a field count other than three, an empty or `N/A` percentage, or a
    /// percentage that is not a number. `inf` and `NaN` are numbers.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [percent, eta, speed] = <[&str; FIELD_COUNT]>::try_from(fields).ok()?;

        let percent = percent.trim();
        let percent = percent.strip_suffix('%').unwrap_or(percent).trim();
        if percent.is_empty() || percent.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return None;
        }

        let percent: f64 = percent.parse().ok()?;

        Some(Self {
            percent,
            eta: eta.trim().to_string(),
            speed: speed.trim().to_string(),
            raw: line.to_string(),
        })
    }
}
