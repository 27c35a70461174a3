//! Source registry with name and hostname dispatch.
//!
//! The [`SourceRegistry`] owns the registered sources in registration order and
//! resolves which of them handles a request. Every lookup is a linear scan
//! where the first match wins.

use std::path::Path;

use tracing::{debug, info, warn};

use super::utils::url_hostname;
use super::{SearchResult, Source, SourceError, SourceInfo};

/// An ordered collection of sources.
pub struct SourceRegistry {
    sources: Vec<Box<dyn Source>>,
}

impl SourceRegistry {
    /// Creates an empty source registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Appends a source to the registry.
    ///
    /// A source whose name is already registered is still appended, but name
    /// lookups keep resolving to the earlier one.
    #[tracing::instrument(skip(self, source), fields(source_name))]
    pub fn register(&mut self, source: Box<dyn Source>) {
        tracing::Span::current().record("source_name", source.name());
        if self.find_by_name(source.name()).is_some() {
            debug!(
                name = source.name(),
                "Source name already registered; name lookups resolve to the first"
            );
        }
        debug!(
            name = source.name(),
            base_url = source.base_url(),
            "Registering source"
        );
        self.sources.push(source);
    }

    /// Returns the number of registered sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns source names in registration order.
    #[must_use]
    pub fn list_sources(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// Returns the descriptor of every source in registration order.
    #[must_use]
    pub fn source_info(&self) -> Vec<SourceInfo> {
        self.sources.iter().map(|s| s.info()).collect()
    }

    /// Returns the first source whose name equals `name` exactly.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Source> {
        self.sources
            .iter()
            .find(|s| s.name() == name)
            .map(AsRef::as_ref)
    }

    /// Returns the first source whose base-URL hostname equals the hostname of `url`.
    ///
    /// URLs that do not parse or carry no host match nothing.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&dyn Source> {
        let hostname = url_hostname(url)?;
        self.sources
            .iter()
            .find(|s| url_hostname(s.base_url()).as_deref() == Some(hostname.as_str()))
            .map(AsRef::as_ref)
    }

    /// Searches one named source, or every source when `source_name` is `None`.
    ///
    /// When searching every source, results are concatenated in registration
    /// order and a failing source is logged and skipped. An unknown
    /// `source_name` yields no results. An empty `source_name` counts as `None`.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str, source_name: Option<&str>) -> Vec<SearchResult> {
        if let Some(name) = requested_name(source_name) {
            let Some(source) = self.find_by_name(name) else {
                warn!(
                    source = name,
                    available = %self.list_sources().join(", "),
                    "Unknown source; no results"
                );
                return Vec::new();
            };
            return match source.search(query).await {
                Ok(results) => {
                    debug!(source = name, count = results.len(), "Search complete");
                    results
                }
                Err(error) => {
                    warn!(source = name, error = %error, "Error searching source");
                    Vec::new()
                }
            };
        }

        let mut results = Vec::new();
        for source in &self.sources {
            match source.search(query).await {
                Ok(found) => {
                    debug!(source = source.name(), count = found.len(), "Search complete");
                    results.extend(found);
                }
                Err(error) => {
                    warn!(
                        source = source.name(),
                        error = %error,
                        "Error searching source; continuing with remaining sources"
                    );
                }
            }
        }
        info!(count = results.len(), "Search across all sources complete");
        results
    }

    /// Downloads `url` into `output_path` through the named or auto-detected source.
    ///
    /// The parent directory of `output_path` is created first if missing. An
    /// empty `source_name` counts as `None`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the parent directory cannot be created or the
    /// file cannot be written.
    /// Returns `SourceError::SourceNotFound` if `source_name` is not registered.
    /// Returns `SourceError::AutoDetectFailed` if no source matches the URL hostname.
    #[tracing::instrument(skip(self, output_path), fields(output = %output_path.display()))]
    pub async fn download(
        &self,
        url: &str,
        output_path: &Path,
        source_name: Option<&str>,
    ) -> Result<bool, SourceError> {
        ensure_parent_dir(output_path).await?;

        let source = match requested_name(source_name) {
            Some(name) => self
                .find_by_name(name)
                .ok_or_else(|| SourceError::source_not_found(name, &self.list_sources()))?,
            None => self
                .find_by_url(url)
                .ok_or_else(|| SourceError::auto_detect_failed(url))?,
        };

        debug!(source = source.name(), "Dispatching download");
        let written = source.download(url, output_path).await?;
        if written {
            info!(source = source.name(), "Download complete");
        } else {
            warn!(source = source.name(), "Source reported no file after download");
        }
        Ok(written)
    }
}

fn requested_name(source_name: Option<&str>) -> Option<&str> {
    source_name.filter(|name| !name.is_empty())
}

async fn ensure_parent_dir(output_path: &Path) -> Result<(), SourceError> {
    let Some(parent) = output_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    let exists = tokio::fs::try_exists(parent)
        .await
        .map_err(|e| SourceError::io(parent, e))?;
    if !exists {
        debug!(dir = %parent.display(), "Creating output directory");
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SourceError::io(parent, e))?;
    }
    Ok(())
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("SourceRegistry")
            .field("source_count", &self.sources.len())
            .field("sources", &names)
            .finish()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::build_default_source_registry;
    use async_trait::async_trait;

    // ==================== MockSource for Testing ====================

    struct MockSource {
        mock_name: &'static str,
        mock_base_url: &'static str,
        fail_search: bool,
    }

    #[async_trait]
    impl Source for MockSource {
        fn name(&self) -> &str {
            self.mock_name
        }

        fn base_url(&self) -> &str {
            self.mock_base_url
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SourceError> {
            if self.fail_search {
                return Err(SourceError::search_failed(self.mock_name, "mock failure"));
            }
            Ok(vec![SearchResult {
                title: query.to_string(),
                author: "Mock".to_string(),
                source: self.mock_name.to_string(),
                url: format!("{}/{query}", self.mock_base_url),
                format: "PDF".to_string(),
            }])
        }

        async fn download(&self, url: &str, output_path: &Path) -> Result<bool, SourceError> {
            tokio::fs::write(output_path, format!("{} {url}", self.mock_name))
                .await
                .map_err(|e| SourceError::io(output_path, e))?;
            Ok(true)
        }
    }

    fn mock_source(name: &'static str, base_url: &'static str) -> Box<MockSource> {
        Box::new(MockSource {
            mock_name: name,
            mock_base_url: base_url,
            fail_search: false,
        })
    }

    fn failing_source(name: &'static str) -> Box<MockSource> {
        Box::new(MockSource {
            mock_name: name,
            mock_base_url: "https://failing.example",
            fail_search: true,
        })
    }

    // ==================== Registry Basic Tests ====================

    #[test]
    fn test_registry_new_is_empty() {
        let registry = SourceRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.source_count(), 0);
        assert!(registry.list_sources().is_empty());
    }

    #[test]
    fn test_registry_debug_shows_sources() {
        let mut registry = SourceRegistry::new();
        registry.register(mock_source("mock-a", "https://a.example"));
        let debug_str = format!("{registry:?}");
        assert!(debug_str.contains("mock-a"), "Debug should show source names");
        assert!(debug_str.contains("source_count: 1"), "Debug should show count");
    }

    #[test]
    fn test_registry_register_appends_in_order() {
        let mut registry = build_default_source_registry();
        registry.register(mock_source("Custom", "https://custom.example"));
        assert_eq!(
            registry.list_sources(),
            vec![
                "Library Genesis",
                "Open Library",
                "Project Gutenberg",
                "Custom",
            ]
        );
    }

    #[test]
    fn test_registry_source_info_in_order() {
        let registry = build_default_source_registry();
        let info = registry.source_info();
        assert_eq!(info.len(), 3);
        assert_eq!(
            info[0],
            SourceInfo::new("Library Genesis", "https://libgen.is")
        );
        assert_eq!(
            info[1],
            SourceInfo::new("Open Library", "https://openlibrary.org")
        );
        assert_eq!(
            info[2],
            SourceInfo::new("Project Gutenberg", "https://www.gutenberg.org")
        );
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_find_by_name_exact_match_only() {
        let registry = build_default_source_registry();
        assert_eq!(
            registry.find_by_name("Open Library").unwrap().name(),
            "Open Library"
        );
        assert!(registry.find_by_name("open library").is_none());
        assert!(registry.find_by_name("Open").is_none());
    }

    #[test]
    fn test_find_by_name_duplicate_resolves_to_first() {
        let mut registry = SourceRegistry::new();
        registry.register(mock_source("dup", "https://first.example"));
        registry.register(mock_source("dup", "https://second.example"));
        assert_eq!(registry.source_count(), 2);
        assert_eq!(
            registry.find_by_name("dup").unwrap().base_url(),
            "https://first.example"
        );
    }

    #[test]
    fn test_find_by_url_matches_hostname() {
        let registry = build_default_source_registry();
        let libgen = registry
            .find_by_url("https://libgen.is/book/index.php?md5=abc")
            .unwrap();
        assert_eq!(libgen.name(), "Library Genesis");
        let gutenberg = registry
            .find_by_url("http://www.gutenberg.org/ebooks/1")
            .unwrap();
        assert_eq!(gutenberg.name(), "Project Gutenberg");
    }

    #[test]
    fn test_find_by_url_requires_exact_host() {
        let registry = build_default_source_registry();
        assert!(registry.find_by_url("https://gutenberg.org/ebooks/1").is_none());
        assert!(registry.find_by_url("https://www.openlibrary.org/x").is_none());
        assert!(registry.find_by_url("not a url").is_none());
    }

    #[test]
    fn test_find_by_url_first_registered_wins() {
        let mut registry = SourceRegistry::new();
        registry.register(mock_source("first", "https://shared.example"));
        registry.register(mock_source("second", "https://shared.example"));
        let source = registry
            .find_by_url("https://shared.example/book")
            .unwrap();
        assert_eq!(source.name(), "first");
    }

    // ==================== search Tests ====================

    #[tokio::test]
    async fn test_search_all_sources_in_order() {
        let registry = build_default_source_registry();
        let results = registry.search("algebra", None).await;
        let sources: Vec<&str> = results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(
            sources,
            vec!["Library Genesis", "Open Library", "Project Gutenberg"]
        );
    }

    #[tokio::test]
    async fn test_search_named_source_only() {
        let registry = build_default_source_registry();
        let results = registry.search("algebra", Some("Open Library")).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source, "Open Library");
        assert_eq!(results[0].title, "Open Library result for 'algebra'");
    }

    #[tokio::test]
    async fn test_search_empty_source_name_searches_all() {
        let registry = build_default_source_registry();
        let results = registry.search("calculus", Some("")).await;
        assert_eq!(results.len(), 3);
        assert_eq!(results, registry.search("calculus", None).await);
    }

    #[tokio::test]
    async fn test_search_unknown_source_is_empty() {
        let registry = build_default_source_registry();
        assert!(registry.search("algebra", Some("Nonexistent")).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_tolerates_failing_source() {
        let mut registry = SourceRegistry::new();
        registry.register(mock_source("a", "https://a.example"));
        registry.register(failing_source("broken"));
        registry.register(mock_source("b", "https://b.example"));

        let results = registry.search("q", None).await;
        let sources: Vec<&str> = results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_search_named_failing_source_is_empty() {
        let mut registry = SourceRegistry::new();
        registry.register(failing_source("broken"));
        assert!(registry.search("q", Some("broken")).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_registry() {
        let registry = SourceRegistry::new();
        assert!(registry.search("q", None).await.is_empty());
    }

    // ==================== download Tests ====================

    #[tokio::test]
    async fn test_download_auto_detects_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let registry = build_default_source_registry();

        let ok = registry
            .download("https://openlibrary.org/x", &path, None)
            .await
            .unwrap();
        assert!(ok);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Open Library"));
        assert!(contents.contains("https://openlibrary.org/x"));
    }

    #[tokio::test]
    async fn test_download_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("c").join("book.txt");
        let registry = build_default_source_registry();

        registry
            .download("https://libgen.is/book", &path, None)
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_download_named_source_ignores_url_host() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let registry = build_default_source_registry();

        let ok = registry
            .download("https://example.com/book", &path, Some("Project Gutenberg"))
            .await
            .unwrap();
        assert!(ok);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Downloaded from Project Gutenberg:"));
    }

    #[tokio::test]
    async fn test_download_empty_source_name_auto_detects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let registry = build_default_source_registry();

        let ok = registry
            .download("https://openlibrary.org/x", &path, Some(""))
            .await
            .unwrap();
        assert!(ok);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Downloaded from Open Library:"));
    }

    #[tokio::test]
    async fn test_download_unknown_named_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("book.txt");
        let registry = build_default_source_registry();

        let err = registry
            .download("https://libgen.is/book", &path, Some("Nonexistent"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::SourceNotFound { .. }));
        assert!(err.to_string().contains("Library Genesis"));
        assert!(!path.exists());
        // The directory is prepared before the source is resolved.
        assert!(dir.path().join("out").is_dir());
    }

    #[tokio::test]
    async fn test_download_unmatched_host_fails_auto_detect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let registry = build_default_source_registry();

        let err = registry
            .download("https://example.com/book", &path, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::AutoDetectFailed { .. }));
        assert!(err.to_string().contains("--source"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_download_to_bare_filename_skips_dir_creation() {
        ensure_parent_dir(Path::new("book.txt")).await.unwrap();
    }

    #[tokio::test]
    async fn test_download_parent_is_a_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("sub").join("book.txt");
        let registry = build_default_source_registry();

        let err = registry
            .download("https://libgen.is/book", &path, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
