//! Project Gutenberg source.
//!
//! Gutenberg's search lives under `/ebooks/search` and takes a `query`
//! parameter rather than `q`.

use std::path::Path;

use async_trait::async_trait;

use super::utils::{search_url, write_placeholder};
use super::{SearchResult, Source, SourceError};

const NAME: &str = "Project Gutenberg";
const BASE_URL: &str = "https://www.gutenberg.org";

/// Project Gutenberg catalog provider.
#[derive(Debug, Default)]
pub struct GutenbergSource;

impl GutenbergSource {
    /// Creates a new `GutenbergSource`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for GutenbergSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SourceError> {
        Ok(vec![SearchResult {
            title: format!("Gutenberg result for '{query}'"),
            author: "Classic Author".to_string(),
            source: NAME.to_string(),
            url: search_url(BASE_URL, "/ebooks/search", "query", query),
            format: "EPUB".to_string(),
        }])
    }

    #[tracing::instrument(skip(self), fields(source = NAME))]
    async fn download(&self, url: &str, output_path: &Path) -> Result<bool, SourceError> {
        write_placeholder(
            output_path,
            &format!("Downloaded from Project Gutenberg: {url}\n"),
        )
        .await
    }
}
