//! Open Library source.

use std::path::Path;

use async_trait::async_trait;

use super::utils::{search_url, write_placeholder};
use super::{SearchResult, Source, SourceError};

const NAME: &str = "Open Library";
const BASE_URL: &str = "https://openlibrary.org";

/// Open Library catalog provider.
#[derive(Debug, Default)]
pub struct OpenLibrarySource;

impl OpenLibrarySource {
    /// Creates a new `OpenLibrarySource`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for OpenLibrarySource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SourceError> {
        Ok(vec![SearchResult {
            title: format!("Open Library result for '{query}'"),
            author: "Open Library Author".to_string(),
            source: NAME.to_string(),
            url: search_url(BASE_URL, "/search", "q", query),
            format: "EPUB".to_string(),
        }])
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn download(&self, url: &str, output_path: &Path) -> Result<bool, SourceError> {
        write_placeholder(
            output_path,
            &format!("Downloaded from Open Library: {url}\n"),
        )
        .await
    }
}
