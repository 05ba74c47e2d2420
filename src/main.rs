use clap::Parser;
use std::process::ExitCode;
use yield_catalog::{Catalog, CrawlError};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CrawlError> {
    let mut catalog = match &args.config {
        Some(path) => Catalog::with_config_file(path)?,
        None => Catalog::default(),
    };
    if let Some(output) = &args.output {
        catalog = catalog.with_output(output);
    }
    if let Some(url) = &args.webdriver_url {
        catalog = catalog.with_webdriver_url(url);
    }

    ::log::info!("Starting Web Scraper for {}", catalog.config().base_url);
    ::log::info!("Web crawling requires a WebDriver server (e.g., ChromeDriver)");

    let start_time = std::time::Instant::now();
    let document = catalog.crawl().await?;

    ::log::info!(
        "SUCCESS: {} pages in {:.2} seconds",
        document.total_pages,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
