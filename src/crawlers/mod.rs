//! The crawl itself: link discovery, product extraction, and the session that
//! drives them from the home page down to individual products.

pub mod catalog;
pub mod links;
pub mod product;

#[cfg(test)]
mod tests;

pub use catalog::{CrawlSession, crawl, dedup_by_url};
pub use links::extract_links;
pub use product::{QualityGate, extract_page};
