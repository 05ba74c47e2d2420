use std::collections::HashSet;

/// URLs already attempted in one crawl session.
///
/// A URL is marked before its fetch is issued, so a page that fails to load is
/// still never requested a second time.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    urls: HashSet<String>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn mark(&mut self, url: &str) {
        self.urls.insert(url.to_string());
    }

    /// Checks if a URL has been visited and marks it as visited if not.
    ///
    /// Returns `true` when the caller is the first to claim the URL.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.seen(url) {
            ::log::trace!("Skipping already visited: {}", url);
            return false;
        }
        self.mark(url);
        true
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
