pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod render;
pub mod results;
pub mod visited;

// Re-export commonly used types for convenience
pub use config::CatalogConfig;
pub use error::CrawlError;
pub use render::{MemoryRenderer, Renderer, WebDriverRenderer};
pub use results::{CrawlDocument, PageRecord};

use std::path::Path;

/// Main builder for a catalog crawl
pub struct Catalog {
    config: CatalogConfig,
    webdriver_url: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_config(CatalogConfig::default())
    }
}

impl Catalog {
    /// Create a new Catalog builder for the catalog rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_config(CatalogConfig::new(base_url))
    }

    /// Create a builder from a complete configuration
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            webdriver_url: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(path: impl AsRef<Path>) -> Result<Self, CrawlError> {
        Ok(Self::with_config(CatalogConfig::from_file(path)?))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(json: &str) -> Result<Self, CrawlError> {
        Ok(Self::with_config(CatalogConfig::from_json(json)?))
    }

    /// Set where the final document is written
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.config.output_path = path.as_ref().to_string_lossy().into_owned();
        self
    }

    /// Use this WebDriver endpoint, ignoring `WEBDRIVER_URL`
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.webdriver_url = Some(url.to_string());
        self
    }

    /// Set the pause after each category, in milliseconds
    pub fn with_politeness_delay(mut self, millis: u64) -> Self {
        self.config.politeness_delay_ms = millis;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Crawl in a browser over WebDriver and write the result.
    ///
    /// The endpoint comes from [`Catalog::with_webdriver_url`], then the
    /// `WEBDRIVER_URL` environment variable, then the configuration.
    pub async fn crawl(self) -> Result<CrawlDocument, CrawlError> {
        let webdriver_url = match self.webdriver_url {
            Some(url) => url,
            None => std::env::var("WEBDRIVER_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| self.config.webdriver_url.clone()),
        };

        let renderer = WebDriverRenderer::connect(&webdriver_url, &self.config.browser).await?;
        let result = crawlers::crawl(&renderer, self.config).await;
        renderer.close().await;
        result
    }

    /// Crawl with a caller-supplied renderer and write the result
    pub async fn crawl_with<R: Renderer>(self, renderer: &R) -> Result<CrawlDocument, CrawlError> {
        crawlers::crawl(renderer, self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let catalog = Catalog::new("http://localhost:8080/shop")
            .with_output("/tmp/out.json")
            .with_politeness_delay(0);
        assert_eq!(catalog.config().base_url, "http://localhost:8080/shop");
        assert_eq!(catalog.config().output_path, "/tmp/out.json");
        assert_eq!(catalog.config().politeness_delay_ms, 0);
        assert_eq!(catalog.config().site, "WebScraper.io Test Site");
    }

    #[tokio::test]
    async fn test_crawl_with_memory_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("catalog.json");
        let renderer = MemoryRenderer::new()
            .with_page(
                "https://shop.test/",
                r#"<ul id="side-menu"><li><a href="/shop/phones">Phones</a></li></ul>"#,
            )
            .with_page(
                "https://shop.test/shop/phones",
                r#"<div class="caption"><a class="title" href="/shop/phones/1">Nokia</a></div>"#,
            )
            .with_page(
                "https://shop.test/shop/phones/1",
                format!("<h1>Nokia 123</h1><p>{}</p>", "Durable phone. ".repeat(10)),
            );

        let document = Catalog::new("https://shop.test")
            .with_output(&output)
            .with_politeness_delay(0)
            .crawl_with(&renderer)
            .await
            .unwrap();

        assert_eq!(document.total_pages, 1);
        assert_eq!(document.pages[0].title, "Nokia 123");
        assert_eq!(document.pages[0].price, "N/A");
        assert!(output.exists());
    }
}
