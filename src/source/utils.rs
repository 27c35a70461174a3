//! Shared helpers for source modules: hostname extraction, result URLs and placeholder writes.

use std::path::Path;

use url::Url;

use super::SourceError;

/// Returns the hostname of `url`, or `None` if it does not parse or has no host.
///
/// Hosts are compared exactly; `www.gutenberg.org` and `gutenberg.org` are
/// different hosts.
#[must_use]
pub(crate) fn url_hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToString::to_string))
}

/// Builds a result URL of the form `{base_url}{path}?{param}={query}`.
///
/// The query is embedded verbatim, reserved characters included.
pub(crate) fn search_url(base_url: &str, path: &str, param: &str, query: &str) -> String {
    format!("{base_url}{path}?{param}={query}")
}

/// Writes `contents` to `output_path` and reports whether the file now exists.
pub(crate) async fn write_placeholder(
    output_path: &Path,
    contents: &str,
) -> Result<bool, SourceError> {
    tokio::fs::write(output_path, contents)
        .await
        .map_err(|e| SourceError::io(output_path, e))?;
    tokio::fs::try_exists(output_path)
        .await
        .map_err(|e| SourceError::io(output_path, e))
}
