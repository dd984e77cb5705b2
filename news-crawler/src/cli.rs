//! Command-line flags for the crawler binary.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "news-crawler")]
#[command(about = "Crawl regional news listings into the news database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of iterations to run
    #[arg(long, default_value_t = 100)]
    pub iterations: u32,

    /// Listing pages fetched per section in one iteration
    #[arg(long, default_value_t = 3)]
    pub pages_per_iteration: u32,

    /// 0-based iteration to start from (resumes deeper pages)
    #[arg(long, default_value_t = 0)]
    pub start_iteration: u32,

    /// Section slug to crawl; repeat for several. All sections when omitted.
    #[arg(long = "section")]
    pub sections: Vec<String>,
}
