use super::{FetchRequest, FetchResult, Renderer};
use crate::config::BrowserConfig;
use crate::error::CrawlError;
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tokio::time::timeout;

/// Endpoints tried when the configured WebDriver URL does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Renders pages in a real browser driven over WebDriver
pub struct WebDriverRenderer {
    client: Client,
    browser: BrowserConfig,
}

impl WebDriverRenderer {
    /// Connects to the WebDriver instance, falling back to common local endpoints
    pub async fn connect(webdriver_url: &str, browser: &BrowserConfig) -> Result<Self, CrawlError> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(capabilities(browser));

        let mut last_error = match builder.connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self::with_client(client, browser));
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
                e.to_string()
            }
        };

        for url in FALLBACK_WEBDRIVER_URLS {
            if url == webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            match builder.connect(url).await {
                Ok(client) => {
                    ::log::debug!("Connected to fallback WebDriver at {}", url);
                    return Ok(Self::with_client(client, browser));
                }
                Err(e) => last_error = e.to_string(),
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(CrawlError::WebDriver(last_error))
    }

    fn with_client(client: Client, browser: &BrowserConfig) -> Self {
        Self {
            client,
            browser: browser.clone(),
        }
    }

    /// Ends the browser session
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }

    /// Navigates and returns the page source, or `None` when the scope is absent
    async fn render(&self, request: &FetchRequest<'_>) -> Result<Option<String>, CmdError> {
        self.client.goto(request.url).await?;

        if let Some(selector) = request.wait_for {
            self.client
                .wait()
                .at_most(self.browser.wait_timeout())
                .for_element(Locator::Css(selector))
                .await?;
        }

        if let Some(scope) = request.scope {
            if self.client.find_all(Locator::Css(scope)).await?.is_empty() {
                return Ok(None);
            }
        }

        self.client.source().await.map(Some)
    }
}

impl Renderer for WebDriverRenderer {
    async fn fetch(&self, request: &FetchRequest<'_>) -> FetchResult {
        let started = std::time::Instant::now();
        ::log::debug!("RENDER: {}", request.url);

        let outcome = timeout(self.browser.page_load_timeout(), self.render(request)).await;

        let result = match outcome {
            Ok(Ok(Some(html))) => FetchResult::ok(html),
            Ok(Ok(None)) => {
                ::log::warn!(
                    "Nothing matches {:?} on {}",
                    request.scope.unwrap_or_default(),
                    request.url
                );
                FetchResult::failed()
            }
            Ok(Err(e)) => {
                handle_navigation_error(&e, request.url);
                FetchResult::failed()
            }
            Err(_) => {
                ::log::error!("Timeout rendering: {}", request.url);
                FetchResult::failed()
            }
        };

        ::log::debug!(
            "Rendered {} in {:.2} seconds",
            request.url,
            started.elapsed().as_secs_f64()
        );
        result
    }
}

/// Logs errors that occur during navigation or page source retrieval
fn handle_navigation_error(error: &CmdError, url: &str) {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while rendering {}", url);
    } else {
        ::log::error!("Failed to render {}: {}", url, error);
    }
}

/// Capabilities for Chrome and Firefox built from the browser settings.
///
/// The disk cache is disabled so every navigation reaches the network.
fn capabilities(browser: &BrowserConfig) -> Capabilities {
    let mut chrome_args = vec![
        format!("--window-size={},{}", browser.window_width, browser.window_height),
        "--disk-cache-size=0".to_string(),
        "--disable-application-cache".to_string(),
    ];
    let mut firefox_args = vec![
        format!("--width={}", browser.window_width),
        format!("--height={}", browser.window_height),
    ];
    if browser.headless {
        chrome_args.push("--headless=new".to_string());
        firefox_args.push("-headless".to_string());
    }
    if let Some(user_agent) = &browser.user_agent {
        chrome_args.push(format!("--user-agent={}", user_agent));
    }

    let mut firefox_options = json!({
        "args": firefox_args,
        "prefs": { "browser.cache.disk.enable": false, "browser.cache.memory.enable": false }
    });
    if let Some(user_agent) = &browser.user_agent {
        firefox_options["prefs"]["general.useragent.override"] = json!(user_agent);
    }

    let mut caps = Capabilities::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": chrome_args }));
    caps.insert("moz:firefoxOptions".to_string(), firefox_options);
    caps
}
