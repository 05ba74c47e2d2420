use crate::config::CatalogConfig;
use crate::crawlers::links::{candidates_in, extract_links};
use crate::crawlers::product::{QualityGate, extract_page};
use crate::error::CrawlError;
use crate::filter::ContentFilter;
use crate::output;
use crate::parsers;
use crate::render::{CacheMode, FetchRequest, Renderer};
use crate::results::{CrawlDocument, CrawlSummary, LinkCandidate, PageRecord};
use crate::visited::VisitedRegistry;
use std::collections::HashSet;

/// Scope for the home page fetch
const HOME_SCOPE: &str = "body";

/// One crawl of the catalog: home page, then categories, then products.
///
/// The session owns the visited registry, so two sessions never share state.
pub struct CrawlSession<'r, R: Renderer> {
    renderer: &'r R,
    config: CatalogConfig,
    filter: ContentFilter,
    visited: VisitedRegistry,
    summary: CrawlSummary,
}

impl<'r, R: Renderer> CrawlSession<'r, R> {
    /// Create a new session, validating the base URL, patterns and selectors
    pub fn new(renderer: &'r R, config: CatalogConfig) -> Result<Self, CrawlError> {
        let filter = ContentFilter::from_config(&config)?;
        for selector in config.category_selectors.iter().chain([&config.product_selector]) {
            parsers::compile(selector)?;
        }

        Ok(Self {
            renderer,
            config,
            filter,
            visited: VisitedRegistry::new(),
            summary: CrawlSummary::default(),
        })
    }

    pub fn visited(&self) -> &VisitedRegistry {
        &self.visited
    }

    pub fn summary(&self) -> CrawlSummary {
        self.summary
    }

    /// Runs the crawl and assembles the document.
    ///
    /// Only a home page that fails to load is an error; any category or
    /// product that fails simply contributes nothing.
    pub async fn run(&mut self) -> Result<CrawlDocument, CrawlError> {
        ::log::info!("Starting catalog crawl at {}", self.filter.base_url());

        let home_url = self.filter.base_url().clone();
        self.visited.mark(home_url.as_str());
        let request = FetchRequest::new(home_url.as_str())
            .with_scope(HOME_SCOPE)
            .with_cache_mode(CacheMode::Bypass);
        let home = self.renderer.fetch(&request).await;
        if !home.success {
            ::log::error!("Failed to load homepage");
            return Err(CrawlError::HomePageUnavailable(home_url.to_string()));
        }

        let categories = self.discover_categories(&home.html, &home_url);
        self.summary.categories = categories.len();
        ::log::info!("Found {} categories", categories.len());

        let mut pages = Vec::new();
        for category in &categories {
            self.crawl_category(category, &mut pages).await;
            tokio::time::sleep(self.config.politeness_delay()).await;
        }

        self.summary.records = pages.len();
        self.summary.dropped = self.summary.product_candidates.saturating_sub(pages.len());
        ::log::info!(
            "Crawl finished: {} categories, {} product links, {} pages kept, {} dropped",
            self.summary.categories,
            self.summary.product_candidates,
            self.summary.records,
            self.summary.dropped
        );

        Ok(CrawlDocument::new(
            self.config.site.clone(),
            self.config.address.clone(),
            pages,
        ))
    }

    /// Tries each category selector against the home page, stopping at the
    /// first one that finds anything.
    fn discover_categories(&self, html: &str, home_url: &url::Url) -> Vec<LinkCandidate> {
        let mut found = Vec::new();
        for selector in &self.config.category_selectors {
            let links = candidates_in(html, home_url, selector, &self.visited, &self.filter);
            ::log::debug!("Category selector {:?} matched {} links", selector, links.len());

            let done = !links.is_empty();
            found.extend(links);
            if done {
                break;
            }
        }
        dedup_by_url(found)
    }

    async fn crawl_category(&mut self, category: &LinkCandidate, pages: &mut Vec<PageRecord>) {
        ::log::info!("Category: {}", category.title);

        let products = extract_links(
            self.renderer,
            &mut self.visited,
            &self.filter,
            &category.url,
            &self.config.product_selector,
        )
        .await;
        self.summary.product_candidates += products.len();

        let gate = QualityGate {
            min_description_len: self.config.min_description_len,
            quality_min_len: self.config.quality_min_len,
        };
        for product in &products {
            if let Some(record) =
                extract_page(self.renderer, &mut self.visited, gate, &product.title, &product.url)
                    .await
            {
                ::log::info!("    Success: {} → {}", record.title, record.price);
                pages.push(record);
            }
        }
    }
}

/// Drops repeated URLs, keeping the first occurrence in place
pub fn dedup_by_url(candidates: Vec<LinkCandidate>) -> Vec<LinkCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.url.clone()))
        .collect()
}

/// Runs one session and writes its document to the configured output path.
///
/// Nothing is written when the session fails.
pub async fn crawl<R: Renderer>(
    renderer: &R,
    config: CatalogConfig,
) -> Result<CrawlDocument, CrawlError> {
    let output_path = config.output_path.clone();
    let mut session = CrawlSession::new(renderer, config)?;
    let document = session.run().await?;
    output::write_document(&output_path, &document)?;
    Ok(document)
}
