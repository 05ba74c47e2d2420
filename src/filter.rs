use crate::config::CatalogConfig;
use crate::error::CrawlError;
use regex::Regex;
use url::Url;

/// Decides which discovered URLs are worth following.
///
/// A URL passes when it stays inside the catalog root, is not excluded by one
/// of the regex patterns, and its path looks like a category or product page.
#[derive(Debug)]
pub struct ContentFilter {
    base_url: Url,
    content_markers: Vec<String>,
    exclude_regexes: Vec<Regex>,
}

impl ContentFilter {
    /// Create a new filter rooted at `base_url`
    pub fn new(
        base_url: Url,
        content_markers: Vec<String>,
        exclude_patterns: &[String],
    ) -> Result<Self, CrawlError> {
        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        let content_markers = content_markers
            .into_iter()
            .map(|marker| marker.to_lowercase())
            .collect();

        Ok(Self {
            base_url,
            content_markers,
            exclude_regexes,
        })
    }

    /// Build the filter described by a crawl configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CrawlError> {
        let base_url = Url::parse(&config.base_url)?;
        Self::new(
            base_url,
            config.content_markers.clone(),
            &config.exclude_patterns,
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Determine if a resolved link should become a crawl candidate
    pub fn should_follow(&self, url: &Url) -> bool {
        if !self.is_in_scope(url) {
            return false;
        }

        let url_str = url.as_str();
        if self.exclude_regexes.iter().any(|regex| regex.is_match(url_str)) {
            return false;
        }

        self.is_content(url)
    }

    /// Whether the URL's path marks a category or product page
    pub fn is_content(&self, url: &Url) -> bool {
        self.is_content_path(url.path())
    }

    /// The path must mention a content marker and have at least three
    /// `/`-separated segments, counting the empty one before a leading slash.
    pub fn is_content_path(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        let has_marker = self
            .content_markers
            .iter()
            .any(|marker| path.contains(marker.as_str()));

        has_marker && path.split('/').count() >= 3
    }

    /// Check if a URL shares the root's origin and sits under the root's path
    fn is_in_scope(&self, url: &Url) -> bool {
        if url.origin() != self.base_url.origin() {
            return false;
        }

        let prefix = self.base_url.path().trim_end_matches('/');
        let path = url.path();
        path == prefix || (path.starts_with(prefix) && path[prefix.len()..].starts_with('/'))
    }
}
