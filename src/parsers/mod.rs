//! HTML querying for catalog pages.
//!
//! Everything in here is synchronous and works on page source that has already
//! been rendered, so it can be exercised without a browser.

pub mod links;
pub mod product;
pub mod text;


use crate::error::CrawlError;
use scraper::Selector;

/// Compile a CSS selector, reporting the offending selector on failure
pub fn compile(selector: &str) -> Result<Selector, CrawlError> {
    Selector::parse(selector).map_err(|e| CrawlError::InvalidSelector(format!("{selector}: {e}")))
}
