use thiserror::Error;

/// Errors that end a crawl session.
///
/// Everything else that can go wrong during a crawl (a category page that fails
/// to render, a product without a price, a page with too little text) is absorbed
/// where it happens and only shows up as a missing record.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Failed to load home page: {0}")]
    HomePageUnavailable(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_errors_name_their_source() {
        let parse = || serde_json::from_str::<u8>("x").unwrap_err();
        assert!(CrawlError::Config(parse()).to_string().starts_with("Configuration error"));
        assert!(CrawlError::Output(parse()).to_string().starts_with("Output error"));
    }
}
