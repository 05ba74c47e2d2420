use crate::parsers::product::ProductFields;
use crate::render::{CacheMode, FetchRequest, Renderer};
use crate::results::PageRecord;
use crate::visited::VisitedRegistry;

/// Scope for product page fetches
const PRODUCT_SCOPE: &str = "body";

/// Product pages are ready once a heading or a paragraph has rendered
const PRODUCT_READY: &str = "p, h1";

/// Description length thresholds applied to product pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityGate {
    /// Below this the dedicated description is replaced by all paragraphs
    pub min_description_len: usize,
    /// Below this the page is dropped
    pub quality_min_len: usize,
}

/// Fetches a product page and turns it into a record.
///
/// Returns `None` without fetching when `url` was already visited, and `None`
/// when the fetch fails or the description does not pass the quality gate.
pub async fn extract_page<R: Renderer>(
    renderer: &R,
    visited: &mut VisitedRegistry,
    gate: QualityGate,
    title_hint: &str,
    url: &str,
) -> Option<PageRecord> {
    if !visited.claim(url) {
        return None;
    }
    ::log::info!("  Scraping: {}", title_hint);

    let request = FetchRequest::new(url)
        .with_scope(PRODUCT_SCOPE)
        .with_cache_mode(CacheMode::Bypass)
        .with_wait_for(PRODUCT_READY);
    let result = renderer.fetch(&request).await;
    if !result.success {
        ::log::warn!("Failed to load product page {}", url);
        return None;
    }

    let record = ProductFields::parse(&result.html, title_hint, gate.min_description_len)
        .into_record(url, gate.quality_min_len);
    if record.is_none() {
        ::log::debug!("Dropped {}: description below {} characters", url, gate.quality_min_len);
    }
    record
}
