//! Crawler configuration: environment plus CLI flags.

use std::env;

use anyhow::{Context, Result};
use reqwest::Url;

use crate::cli::Cli;
use crate::crawler::CrawlPlan;
use crate::fetch::DEFAULT_USER_AGENT;

/// Sections crawled by default, in crawl order.
pub const SECTIONS: [&str; 6] = [
    "novosti",
    "politics",
    "economics",
    "society",
    "incident",
    "culture-i-sport",
];

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// CRAWLER_BASE_URL
    pub base_url: String,
    /// CRAWLER_USER_AGENT
    pub user_agent: String,
    pub plan: CrawlPlan,
}

impl CrawlerConfig {
    /// Load from environment variables and parsed flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "./news.db".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/news-crawler.log".to_string());
        let base_url =
            env::var("CRAWLER_BASE_URL").unwrap_or_else(|_| "https://polit74.ru".to_string());
        let user_agent =
            env::var("CRAWLER_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let sections = if cli.sections.is_empty() {
            SECTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.sections.clone()
        };

        Ok(Self {
            database_url,
            log_file,
            base_url,
            user_agent,
            plan: CrawlPlan {
                sections,
                start_iteration: cli.start_iteration,
                iterations: cli.iterations,
                pages_per_iteration: cli.pages_per_iteration,
            },
        })
    }

    /// Base URL must be absolute; sections must be known; at least one page per iteration.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.plan.pages_per_iteration == 0 {
            anyhow::bail!("--pages-per-iteration must be at least 1");
        }
        if let Some(unknown) = self
            .plan
            .sections
            .iter()
            .find(|s| !SECTIONS.contains(&s.as_str()))
        {
            anyhow::bail!(
                "Unknown section: {} (expected one of {})",
                unknown,
                SECTIONS.join(", ")
            );
        }
        Ok(())
    }

    pub fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .with_context(|| format!("CRAWLER_BASE_URL is not a valid URL: {}", self.base_url))
    }
}
