//! Page rendering.
//!
//! A [`Renderer`] turns a URL into rendered HTML. Failures are reported through
//! [`FetchResult::success`] rather than as errors: a page that will not load is an
//! ordinary outcome for a crawler and the caller decides what it costs.

pub mod memory;
pub mod webdriver;

pub use memory::MemoryRenderer;
pub use webdriver::WebDriverRenderer;

use std::future::Future;

/// Whether the renderer may answer from a cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Enabled,
    Bypass,
}

/// What to fetch and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest<'a> {
    pub url: &'a str,

    /// The fetch only succeeds if at least one element matches this selector
    pub scope: Option<&'a str>,

    pub cache_mode: CacheMode,

    /// Selector the renderer waits for before taking the page source
    pub wait_for: Option<&'a str>,
}

impl<'a> FetchRequest<'a> {
    /// A request for `url` with no scope, no wait condition, and the cache bypassed
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            scope: None,
            cache_mode: CacheMode::Bypass,
            wait_for: None,
        }
    }

    pub fn with_scope(mut self, scope: &'a str) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_cache_mode(mut self, cache_mode: CacheMode) -> Self {
        self.cache_mode = cache_mode;
        self
    }

    pub fn with_wait_for(mut self, selector: &'a str) -> Self {
        self.wait_for = Some(selector);
        self
    }
}

/// Outcome of a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub success: bool,

    /// Full page source after rendering; empty when the fetch failed
    pub html: String,
}

impl FetchResult {
    pub fn ok(html: String) -> Self {
        Self {
            success: true,
            html,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            html: String::new(),
        }
    }
}

/// Something that can render pages for the crawler
pub trait Renderer {
    /// Fetch and render a page. Never fails loudly; see [`FetchResult`].
    fn fetch(&self, request: &FetchRequest<'_>) -> impl Future<Output = FetchResult> + Send;
}
