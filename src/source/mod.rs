//! Ebook sources and the registry that dispatches between them.
//!
//! # Architecture
//!
//! - [`Source`] - Async trait that individual catalog providers implement
//! - [`SourceRegistry`] - Ordered collection of sources with name and hostname dispatch
//! - [`LibraryGenesisSource`] - Library Genesis provider
//! - [`OpenLibrarySource`] - Open Library provider
//! - [`GutenbergSource`] - Project Gutenberg provider
//!
//! # Example
//!
//! ```no_run
//! use textbook_downloader::source::build_default_source_registry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = build_default_source_registry();
//!
//! for result in registry.search("linear algebra", None).await {
//!     println!("{} ({})", result.title, result.source);
//! }
//!
//! registry
//!     .download("https://openlibrary.org/works/OL1W", "books/algebra.txt".as_ref(), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod gutenberg;
mod libgen;
mod openlibrary;
mod registry;
mod utils;

pub use error::SourceError;
pub use gutenberg::GutenbergSource;
pub use libgen::LibraryGenesisSource;
pub use openlibrary::OpenLibrarySource;
pub use registry::SourceRegistry;

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Builds the registry used by CLI execution flows.
///
/// Registration order is deterministic; it decides which source wins when
/// two sources share a hostname.
#[must_use]
pub fn build_default_source_registry() -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.register(Box::new(LibraryGenesisSource::new()));
    registry.register(Box::new(OpenLibrarySource::new()));
    registry.register(Box::new(GutenbergSource::new()));
    registry
}

/// A single search hit returned by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub author: String,
    /// Name of the source that produced this result.
    pub source: String,
    pub url: String,
    /// File format label, e.g. `PDF` or `EPUB`.
    pub format: String,
}

/// Descriptor of a registered source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    /// Scheme and host, e.g. `https://openlibrary.org`.
    pub base_url: String,
}

impl SourceInfo {
    /// Creates a new source descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

/// Trait that all ebook sources implement.
///
/// # Object Safety
///
/// This trait uses `async_trait` so sources can be stored as `Box<dyn Source>`
/// in the registry.
#[async_trait]
pub trait Source: Send + Sync {
    /// Returns the source's display name (e.g. "Open Library").
    fn name(&self) -> &str;

    /// Returns the source's base URL (scheme and host).
    fn base_url(&self) -> &str;

    /// Returns the descriptor for this source.
    fn info(&self) -> SourceInfo {
        SourceInfo::new(self.name(), self.base_url())
    }

    /// Searches the catalog for `query`. An empty query is permitted.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SourceError>;

    /// Downloads `url` into `output_path`.
    ///
    /// Returns `Ok(true)` when the file exists after the write. The URL is not
    /// checked against this source's domain.
    async fn download(&self, url: &str, output_path: &Path) -> Result<bool, SourceError>;
}
