//! # News crawler
//!
//! Walks section listing pages of the news site, parses Russian listing dates and
//! upserts every item into the shared news database.

pub mod cli;
pub mod config;
pub mod crawler;
pub mod date_parse;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;

pub use cli::Cli;
pub use config::{CrawlerConfig, SECTIONS};
pub use crawler::{page_range, Clock, CrawlPlan, CrawlStats, Crawler};
pub use date_parse::parse_site_date;
pub use error::{CrawlerError, DateParseError, Result};
pub use extract::{Extractor, ListingItem};
pub use fetch::{HttpPageSource, PageSource, DEFAULT_USER_AGENT};
pub use logging::init_logging;
