//! CLI output formatting.
//!
//! Renderers return lines instead of printing so command handlers stay thin
//! and the layout can be tested directly.

use anyhow::{Context, Result};
use textbook_downloader::{SearchResult, SourceInfo};

/// Message printed when a search yields nothing.
pub const NO_RESULTS: &str = "No results found.";

/// Returns the lines echoing a search request before results are printed.
pub fn search_header_lines(query: &str, source: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("Searching for: {query}")];
    if let Some(source) = source {
        lines.push(format!("Source: {source}"));
    }
    lines.push(String::new());
    lines
}

/// Returns the numbered result listing, or the empty-result message.
pub fn search_result_lines(results: &[SearchResult]) -> Vec<String> {
    if results.is_empty() {
        return vec![NO_RESULTS.to_string()];
    }

    let mut lines = vec![format!("Found {} result(s):", results.len()), String::new()];
    for (index, result) in results.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, result.title));
        lines.push(format!("   Author: {}", result.author));
        lines.push(format!("   Source: {}", result.source));
        lines.push(format!("   Format: {}", result.format));
        lines.push(format!("   URL: {}", result.url));
        lines.push(String::new());
    }
    lines
}

/// Returns the lines echoing a download request.
pub fn download_header_lines(url: &str, output: &str, source: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        format!("Downloading from: {url}"),
        format!("Output: {output}"),
    ];
    if let Some(source) = source {
        lines.push(format!("Source: {source}"));
    }
    lines.push(String::new());
    lines
}

pub fn download_success_line(output: &str) -> String {
    format!("✓ Successfully downloaded to: {output}")
}

pub fn download_failure_line() -> String {
    "✗ Download failed".to_string()
}

/// Returns the bulleted source-name listing.
pub fn source_list_lines(names: &[String]) -> Vec<String> {
    let mut lines = vec!["Available sources:".to_string()];
    lines.extend(names.iter().map(|name| format!("  • {name}")));
    lines
}

/// Returns the per-source detail listing.
pub fn source_info_lines(info: &[SourceInfo]) -> Vec<String> {
    let mut lines = vec!["Source Information:".to_string(), String::new()];
    for source in info {
        lines.push(format!("• {}", source.name));
        lines.push(format!("  Base URL: {}", source.base_url));
        lines.push(String::new());
    }
    lines
}

/// Serializes `value` as pretty-printed JSON.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
