//! yt-dlp command line construction.

use super::Options;
use crate::error::{Error, Result};
use crate::progress::PROGRESS_TEMPLATE;

use std::ffi::OsString;

/// Build the arguments passed to yt-dlp for downloading `url`.
///
/// The order is fixed: `--newline`, the progress flags, `-o`, `-f`,
/// `--proxy`, `--cookies`, one `--add-header` per header sorted by name, the
/// extra arguments and finally the URL. Empty options are left out.
///
/// ```rust
/// use video_downloader::download::{build_args, Options};
///
/// let args = build_args("https://example.com/v", &Options::new().format("best"))?;
/// assert_eq!(args, ["--newline", "--no-progress", "-f", "best", "https://example.com/v"]);
/// # Ok::<(), video_downloader::Error>(())
/// ```
pub fn build_args(url: &str, options: &Options) -> Result<Vec<OsString>> {
    if url.is_empty() {
        return Err(Error::UrlRequired);
    }

    let mut args: Vec<OsString> = vec!["--newline".into()];

    if options.progress.is_some() {
        args.push("--progress-template".into());
        args.push(PROGRESS_TEMPLATE.into());
    } else {
        args.push("--no-progress".into());
    }

    if let Some(template) = non_empty(&options.output_template) {
        args.push("-o".into());
        args.push(template.into());
    }

    if let Some(format) = non_empty(&options.format) {
        args.push("-f".into());
        args.push(format.into());
    }

    if let Some(proxy) = non_empty(&options.proxy) {
        args.push("--proxy".into());
        args.push(proxy.into());
    }

    if let Some(cookies) = options
        .cookies_file
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        args.push("--cookies".into());
        args.push(cookies.into());
    }

    // BTreeMap iterates in key order.
    for (name, value) in &options.headers {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        args.push("--add-header".into());
        args.push(format!("{}:{}", name, value).into());
    }

    args.extend(options.extra_args.iter().cloned());
    args.push(url.into());

    Ok(args)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_minimal_args() {
        let args = strings(build_args("https://example.com/v", &Options::new()).unwrap());
        assert_eq!(args, ["--newline", "--no-progress", "https://example.com/v"]);
    }

    #[test]
    fn test_progress_template_replaces_no_progress() {
        let options = Options::new().on_progress(|_| {});
        let args = strings(build_args("u", &options).unwrap());

        assert_eq!(
            args,
            ["--newline", "--progress-template", PROGRESS_TEMPLATE, "u"]
        );
    }

    #[test]
    fn test_all_flags_in_order() {
        let options = Options::new()
            .output_template("%(title)s.%(ext)s")
            .format("bestvideo+bestaudio/best")
            .proxy("socks5://127.0.0.1:9050")
            .cookies_file("/tmp/cookies.txt")
            .header("User-Agent", "curl/8.0")
            .extra_args(["--no-playlist", "--restrict-filenames"]);

        let args = strings(build_args("https://example.com/v", &options).unwrap());

        assert_eq!(
            args,
            [
                "--newline",
                "--no-progress",
                "-o",
                "%(title)s.%(ext)s",
                "-f",
                "bestvideo+bestaudio/best",
                "--proxy",
                "socks5://127.0.0.1:9050",
                "--cookies",
                "/tmp/cookies.txt",
                "--add-header",
                "User-Agent:curl/8.0",
                "--no-playlist",
                "--restrict-filenames",
                "https://example.com/v",
            ]
        );
    }

    #[test]
    fn test_headers_sorted_by_name() {
        let options = Options::new().headers([("Z", "1"), ("A", "2")]);
        let args = strings(build_args("u", &options).unwrap());

        assert_eq!(
            args,
            ["--newline", "--no-progress", "--add-header", "A:2", "--add-header", "Z:1", "u"]
        );
    }

    #[test]
    fn test_blank_header_values_skipped_and_trimmed() {
        let options = Options::new()
            .header("Referer", "   ")
            .header("Origin", "  https://example.com  ");
        let args = strings(build_args("u", &options).unwrap());

        assert_eq!(
            args,
            ["--newline", "--no-progress", "--add-header", "Origin:https://example.com", "u"]
        );
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let options = Options::new()
            .output_template("")
            .format("")
            .proxy("")
            .cookies_file("");
        let args = strings(build_args("u", &options).unwrap());

        assert_eq!(args, ["--newline", "--no-progress", "u"]);
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = build_args("", &Options::new()).unwrap_err();
        assert!(matches!(err, Error::UrlRequired));
    }
}
