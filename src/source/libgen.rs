//! Library Genesis source.
//!
//! Placeholder provider: search echoes the query as a single PDF record and
//! download writes a marker line naming the URL.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::utils::{search_url, write_placeholder};
use super::{SearchResult, Source, SourceError};

const NAME: &str = "Library Genesis";
const BASE_URL: &str = "https://libgen.is";

/// Library Genesis catalog provider.
#[derive(Debug)]
pub struct LibraryGenesisSource;

impl LibraryGenesisSource {
    /// Creates a new `LibraryGenesisSource`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LibraryGenesisSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for LibraryGenesisSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SourceError> {
        Ok(vec![SearchResult {
            title: format!("Sample result for '{query}'"),
            author: "Sample Author".to_string(),
            source: NAME.to_string(),
            url: search_url(BASE_URL, "/search", "q", query),
            format: "PDF".to_string(),
        }])
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn download(&self, url: &str, output_path: &Path) -> Result<bool, SourceError> {
        debug!(path = %output_path.display(), "Writing placeholder file");
        write_placeholder(output_path, &format!("Downloaded from {url}\n")).await
    }
}
