//! Binary for the news crawler.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use news_crawler::{init_logging, Cli, Crawler, CrawlerConfig, HttpPageSource};
use news_storage::NewsRepository;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CrawlerConfig::load(&cli)?;
    config.validate()?;
    init_logging(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        base_url = %config.base_url,
        iterations = config.plan.iterations,
        pages_per_iteration = config.plan.pages_per_iteration,
        "Starting crawler"
    );

    let repo = Arc::new(NewsRepository::new(&config.database_url).await?);
    let source = Arc::new(HttpPageSource::new(&config.base_url, &config.user_agent)?);
    let crawler = Crawler::new(source, repo, config.parsed_base_url()?)?;

    crawler.run(&config.plan).await?;
    Ok(())
}
