use serde::{Deserialize, Serialize};

/// Price written when a product page shows none
pub const PRICE_UNAVAILABLE: &str = "N/A";

/// A link discovered on a page that passed every filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// Trimmed anchor text, never empty
    pub title: String,

    /// Absolute URL of the link target
    pub url: String,
}

impl LinkCandidate {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One product page that made it through the quality gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub title: String,
    pub url: String,
    pub description: String,
    pub price: String,
}

/// The document written at the end of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlDocument {
    pub site: String,
    pub address: String,
    pub total_pages: usize,
    pub pages: Vec<PageRecord>,
}

impl CrawlDocument {
    /// Create a new document; `total_pages` always follows `pages`
    pub fn new(site: String, address: String, pages: Vec<PageRecord>) -> Self {
        Self {
            site,
            address,
            total_pages: pages.len(),
            pages,
        }
    }
}

/// Counters reported at the end of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub categories: usize,
    pub product_candidates: usize,
    pub records: usize,
    pub dropped: usize,
}
