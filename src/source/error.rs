//! Error types for source operations.
//!
//! Messages follow the What/Suggestion pattern so the CLI can print them
//! verbatim.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while searching or downloading through a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// An explicitly named source is not registered
    #[error("source '{name}' not found\n  Suggestion: Use one of: {available}")]
    SourceNotFound {
        /// The requested source name
        name: String,
        /// Comma-separated list of registered source names
        available: String,
    },

    /// No registered source matches the URL hostname
    #[error(
        "could not detect source from URL: {url}\n  Suggestion: Please specify the source using --source parameter"
    )]
    AutoDetectFailed {
        /// The URL whose hostname matched no source
        url: String,
    },

    /// A source failed to produce search results
    #[error("search failed for source '{source_name}': {reason}")]
    SearchFailed {
        /// The source that failed
        source_name: String,
        /// Why the search failed
        reason: String,
    },

    /// Filesystem failure while preparing or writing the output file
    #[error(
        "I/O error at '{}': {source}\n  Suggestion: Check that the path is writable",
        path.display()
    )]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Creates a `SourceNotFound` error listing the registered names.
    #[must_use]
    pub fn source_not_found(name: &str, available: &[String]) -> Self {
        Self::SourceNotFound {
            name: name.to_string(),
            available: available.join(", "),
        }
    }

    /// Creates an `AutoDetectFailed` error.
    #[must_use]
    pub fn auto_detect_failed(url: &str) -> Self {
        Self::AutoDetectFailed {
            url: url.to_string(),
        }
    }

    /// Creates a `SearchFailed` error.
    #[must_use]
    pub fn search_failed(source_name: &str, reason: &str) -> Self {
        Self::SearchFailed {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `Io` error for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
