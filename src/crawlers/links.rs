use crate::filter::ContentFilter;
use crate::parsers::{self, links};
use crate::render::{CacheMode, FetchRequest, Renderer};
use crate::results::LinkCandidate;
use crate::visited::VisitedRegistry;
use url::Url;

/// Fetches `url` and returns the links matching `selector` that are worth
/// following, in the order they appear on the page.
///
/// Returns nothing without fetching when `url` was already visited in this
/// session. A failed fetch also yields nothing. The same target may appear
/// more than once in the result; callers dedupe.
pub async fn extract_links<R: Renderer>(
    renderer: &R,
    visited: &mut VisitedRegistry,
    filter: &ContentFilter,
    url: &str,
    selector: &str,
) -> Vec<LinkCandidate> {
    if !visited.claim(url) {
        return Vec::new();
    }

    let request = FetchRequest::new(url)
        .with_scope(selector)
        .with_cache_mode(CacheMode::Bypass);
    let result = renderer.fetch(&request).await;
    if !result.success {
        ::log::warn!("Failed to load {} for links matching {:?}", url, selector);
        return Vec::new();
    }

    let page_url = match Url::parse(url) {
        Ok(page_url) => page_url,
        Err(e) => {
            ::log::warn!("Cannot resolve links against {}: {}", url, e);
            return Vec::new();
        }
    };

    candidates_in(&result.html, &page_url, selector, visited, filter)
}

/// Filters the anchors matching `selector` in already-rendered `html`.
///
/// A candidate must stay inside the catalog, look like a content page, not be
/// visited yet, and carry visible text.
pub fn candidates_in(
    html: &str,
    page_url: &Url,
    selector: &str,
    visited: &VisitedRegistry,
    filter: &ContentFilter,
) -> Vec<LinkCandidate> {
    let selector = match parsers::compile(selector) {
        Ok(selector) => selector,
        Err(e) => {
            ::log::warn!("{}", e);
            return Vec::new();
        }
    };

    links::anchors(html, page_url, &selector)
        .into_iter()
        .filter(|anchor| {
            let keep = filter.should_follow(&anchor.url)
                && !visited.seen(anchor.url.as_str())
                && !anchor.text.is_empty();
            if !keep {
                ::log::trace!("Rejected link: {}", anchor.url);
            }
            keep
        })
        .map(|anchor| LinkCandidate::new(anchor.text, anchor.url))
        .collect()
}
