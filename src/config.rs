use crate::error::CrawlError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// A product page whose dedicated description is shorter than this falls back
/// to the text of every paragraph on the page.
pub const MIN_DESCRIPTION_LEN: usize = 50;

/// Pages whose final description is shorter than this are dropped.
pub const QUALITY_MIN_LEN: usize = 100;

/// Configuration for a catalog crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the catalog; also the only origin links may point into
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Label written to the `site` field of the output document
    #[serde(default = "default_site")]
    pub site: String,

    /// Label written to the `address` field of the output document
    #[serde(default = "default_address")]
    pub address: String,

    /// Path keywords identifying scrapable categories
    #[serde(default = "default_content_markers")]
    pub content_markers: Vec<String>,

    /// Selectors tried in order against the home page to find categories
    #[serde(default = "default_category_selectors")]
    pub category_selectors: Vec<String>,

    /// Selector for product anchors on a category page
    #[serde(default = "default_product_selector")]
    pub product_selector: String,

    /// Pause after each category, in milliseconds
    #[serde(default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Below this length the description falls back to all paragraphs
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,

    /// Below this length the page is dropped
    #[serde(default = "default_quality_min_len")]
    pub quality_min_len: usize,

    /// Regex patterns for URLs never worth fetching; none unless configured
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Where the final document is written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Settings for the browser session behind the WebDriver renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_headless")]
    pub headless: bool,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Overrides the browser's user agent when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Upper bound for loading a single page
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,

    /// Upper bound for a wait condition to be satisfied
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            user_agent: None,
            page_load_timeout_secs: default_page_load_timeout_secs(),
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}

impl BrowserConfig {
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

fn default_base_url() -> String {
    "https://webscraper.io/test-sites/e-commerce/static".to_string()
}

fn default_site() -> String {
    "WebScraper.io Test Site".to_string()
}

fn default_address() -> String {
    "Demo Address".to_string()
}

fn default_content_markers() -> Vec<String> {
    vec!["computers".to_string(), "phones".to_string()]
}

fn default_category_selectors() -> Vec<String> {
    vec![
        "ul#side-menu > li > a".to_string(),
        "a[href*='/computers']".to_string(),
        "a[href*='/phones']".to_string(),
    ]
}

fn default_product_selector() -> String {
    ".caption a.title".to_string()
}

fn default_politeness_delay_ms() -> u64 {
    1000
}

fn default_min_description_len() -> usize {
    MIN_DESCRIPTION_LEN
}

fn default_quality_min_len() -> usize {
    QUALITY_MIN_LEN
}

fn default_output_path() -> String {
    "demo_content.json".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

fn default_page_load_timeout_secs() -> u64 {
    45
}

fn default_wait_timeout_secs() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site: default_site(),
            address: default_address(),
            content_markers: default_content_markers(),
            category_selectors: default_category_selectors(),
            product_selector: default_product_selector(),
            politeness_delay_ms: default_politeness_delay_ms(),
            min_description_len: default_min_description_len(),
            quality_min_len: default_quality_min_len(),
            exclude_patterns: Vec::new(),
            output_path: default_output_path(),
            webdriver_url: default_webdriver_url(),
            browser: BrowserConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a configuration for a different catalog root, keeping every other default
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}
