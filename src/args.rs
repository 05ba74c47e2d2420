use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yield-catalog")]
#[command(about = "Crawls a demo e-commerce catalog into a JSON document of products")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the document (overrides the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// WebDriver endpoint (overrides WEBDRIVER_URL and the configuration)
    #[arg(long)]
    pub webdriver_url: Option<String>,
}
