use super::fixtures::*;
use crate::crawlers::{CrawlSession, crawl};
use crate::error::CrawlError;
use crate::render::MemoryRenderer;
use std::time::Duration;

#[tokio::test]
async fn test_two_categories_six_products() {
    let renderer = standard_catalog();
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(document.site, "WebScraper.io Test Site");
    assert_eq!(document.address, "Demo Address");
    assert_eq!(document.total_pages, 6);
    assert_eq!(document.pages.len(), 6);

    let urls: Vec<&str> = document.pages.iter().map(|p| p.url.as_str()).collect();
    let expected: Vec<String> = ["computers", "phones"]
        .iter()
        .flat_map(|c| (1..=3).map(move |n| product_url(c, n)))
        .collect();
    assert_eq!(urls, expected);

    let first = &document.pages[0];
    assert_eq!(first.title, "computers model 1");
    assert_eq!(first.price, "$101.00");
    assert!(first.description.starts_with("computers 1 computers 1"));

    let summary = session.summary();
    assert_eq!(summary.categories, 2);
    assert_eq!(summary.product_candidates, 6);
    assert_eq!(summary.records, 6);
    assert_eq!(summary.dropped, 0);
}

#[tokio::test]
async fn test_every_url_fetched_at_most_once() {
    let renderer = standard_catalog();
    let mut session = CrawlSession::new(&renderer, config()).unwrap();
    session.run().await.unwrap();

    let fetches = renderer.fetches();
    // home + 2 categories + 6 products
    assert_eq!(fetches.len(), 9);
    for fetch in &fetches {
        assert_eq!(renderer.fetch_count(&fetch.url), 1, "{} fetched twice", fetch.url);
        assert!(session.visited().seen(&fetch.url));
    }
    assert_eq!(fetches[0].url, BASE);
}

#[tokio::test]
async fn test_one_failed_product_is_skipped() {
    let renderer = standard_catalog().with_failure(product_url("phones", 2));
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(document.total_pages, 5);
    assert!(!document.pages.iter().any(|p| p.url == product_url("phones", 2)));
    assert_eq!(session.summary().dropped, 1);
}

#[tokio::test]
async fn test_failed_category_contributes_nothing() {
    let renderer = standard_catalog().with_failure(category_url("computers"));
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(document.total_pages, 3);
    assert!(document.pages.iter().all(|p| p.url.contains("/phones/")));
}

#[tokio::test]
async fn test_home_page_failure_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("demo_content.json");
    let renderer = standard_catalog().with_failure(BASE);
    let mut config = config();
    config.output_path = output.to_string_lossy().into_owned();

    let result = crawl(&renderer, config).await;

    assert!(matches!(result, Err(CrawlError::HomePageUnavailable(_))));
    assert!(!output.exists());
    assert_eq!(renderer.fetches().len(), 1);
}

#[tokio::test]
async fn test_crawl_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("demo_content.json");
    let renderer = standard_catalog();
    let mut config = config();
    config.output_path = output.to_string_lossy().into_owned();

    let document = crawl(&renderer, config).await.unwrap();

    let written: crate::results::CrawlDocument =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, document);
    assert_eq!(written.total_pages, 6);
}

#[tokio::test]
async fn test_category_selector_fallback() {
    // No side menu: the second selector has to find the category
    let home = r#"<html><body>
        <nav><a href="/catalog/computers">Computers</a></nav>
        <nav><a href="/catalog/phones">Phones</a></nav>
    </body></html>"#;
    let renderer = standard_catalog().with_page(BASE, home);
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    // The phones selector is never tried once computers matched
    assert_eq!(session.summary().categories, 1);
    assert_eq!(document.total_pages, 3);
    assert_eq!(renderer.fetch_count(&category_url("phones")), 0);
}

#[tokio::test]
async fn test_repeated_categories_and_products_are_deduplicated() {
    let home = home_page(&[
        ("/catalog/computers", "Computers"),
        ("/catalog/computers", "Computers (again)"),
        ("/catalog/phones", "Phones"),
    ]);
    // The phones listing also links to a computer already scraped
    let phones = format!(
        "{}{}",
        category_page("phones", &[1, 2, 3]),
        r#"<div class="caption"><a class="title" href="/catalog/computers/product/1">Again</a></div>"#
    );
    let renderer = standard_catalog()
        .with_page(BASE, home)
        .with_page(category_url("phones"), phones);
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(session.summary().categories, 2);
    assert_eq!(document.total_pages, 6);
    assert_eq!(renderer.fetch_count(&category_url("computers")), 1);
    assert_eq!(renderer.fetch_count(&product_url("computers", 1)), 1);
}

#[tokio::test]
async fn test_thin_product_pages_are_dropped() {
    let thin = r#"<html><body><h1>Placeholder</h1><p>Coming soon</p></body></html>"#;
    let renderer = standard_catalog().with_page(product_url("computers", 3), thin);
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(document.total_pages, 5);
    assert!(!document.pages.iter().any(|p| p.title == "Placeholder"));
}

#[tokio::test]
async fn test_missing_price_defaults() {
    let no_price = format!(
        r#"<html><body><h1>Bare</h1><p class="description">{}</p></body></html>"#,
        "plain ".repeat(30)
    );
    let renderer = standard_catalog().with_page(product_url("phones", 1), no_price);
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    let bare = document.pages.iter().find(|p| p.title == "Bare").unwrap();
    assert_eq!(bare.price, "N/A");
}

#[tokio::test(start_paused = true)]
async fn test_pause_after_each_category() {
    let renderer = standard_catalog();
    let mut config = config();
    config.politeness_delay_ms = 1000;
    let mut session = CrawlSession::new(&renderer, config).unwrap();

    let started = tokio::time::Instant::now();
    session.run().await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn test_sessions_do_not_share_visited_state() {
    let renderer = standard_catalog();

    let first = CrawlSession::new(&renderer, config()).unwrap().run().await.unwrap();
    let second = CrawlSession::new(&renderer, config()).unwrap().run().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(renderer.fetch_count(BASE), 2);
}

#[tokio::test]
async fn test_empty_home_page_yields_empty_document() {
    let renderer = MemoryRenderer::new().with_page(BASE, "<html><body><p>Closed</p></body></html>");
    let mut session = CrawlSession::new(&renderer, config()).unwrap();

    let document = session.run().await.unwrap();

    assert_eq!(document.total_pages, 0);
    assert!(document.pages.is_empty());
}
