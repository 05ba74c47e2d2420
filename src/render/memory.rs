use super::{CacheMode, FetchRequest, FetchResult, Renderer};
use scraper::{Html, Selector};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// One fetch served by a [`MemoryRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    pub url: String,
    pub cache_mode: CacheMode,
    pub wait_for: Option<String>,
}

/// Renderer that serves pages from memory.
///
/// Unknown URLs and URLs registered with [`MemoryRenderer::with_failure`] report
/// failure. Scope and wait selectors must match something in the stored page,
/// the same way a browser-backed renderer would time out on them.
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    log: Mutex<Vec<FetchRecord>>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Report failure for `url`, even if a page is stored for it
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }

    /// Every fetch served so far, in order
    pub fn fetches(&self) -> Vec<FetchRecord> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// How many times `url` has been fetched
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches().iter().filter(|f| f.url == url).count()
    }

    fn record(&self, request: &FetchRequest<'_>) {
        let entry = FetchRecord {
            url: request.url.to_string(),
            cache_mode: request.cache_mode,
            wait_for: request.wait_for.map(str::to_string),
        };
        match self.log.lock() {
            Ok(mut log) => log.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Whether `selector` matches at least one element of `document`
fn has_match(document: &Html, selector: &str) -> bool {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).next().is_some(),
        Err(_) => {
            ::log::warn!("Unparseable selector: {}", selector);
            false
        }
    }
}

impl Renderer for MemoryRenderer {
    async fn fetch(&self, request: &FetchRequest<'_>) -> FetchResult {
        self.record(request);

        if self.failing.contains(request.url) {
            ::log::debug!("Configured failure for {}", request.url);
            return FetchResult::failed();
        }

        let Some(html) = self.pages.get(request.url) else {
            ::log::debug!("No page stored for {}", request.url);
            return FetchResult::failed();
        };

        let document = Html::parse_document(html);
        for selector in request.scope.iter().chain(request.wait_for.iter()) {
            if !has_match(&document, selector) {
                ::log::debug!("Nothing matches {:?} on {}", selector, request.url);
                return FetchResult::failed();
            }
        }

        FetchResult::ok(html.clone())
    }
}
