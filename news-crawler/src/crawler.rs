//! Crawl loop: iterations over sections and pages, extraction, date parsing, upsert.

use std::ops::{AddAssign, RangeInclusive};
use std::sync::Arc;

use chrono::NaiveDateTime;
use news_storage::{NewsRecord, NewsStore, UpsertOutcome};
use reqwest::Url;
use tracing::{info, instrument, warn};

use crate::date_parse::parse_site_date;
use crate::error::Result;
use crate::extract::Extractor;
use crate::fetch::PageSource;

/// Source of "now" for relative listing dates.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Which iterations, pages and sections to crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPlan {
    pub sections: Vec<String>,
    pub start_iteration: u32,
    pub iterations: u32,
    pub pages_per_iteration: u32,
}

/// Pages walked by 0-based `iteration`.
pub fn page_range(iteration: u32, pages_per_iteration: u32) -> RangeInclusive<u32> {
    let first = iteration
        .saturating_mul(pages_per_iteration)
        .saturating_add(1);
    first..=first.saturating_add(pages_per_iteration.saturating_sub(1))
}

/// Counters for one page, section or whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages: u32,
    pub items: u32,
    pub inserted: u32,
    pub merged: u32,
    pub unchanged: u32,
    pub dropped: u32,
}

impl AddAssign for CrawlStats {
    fn add_assign(&mut self, other: Self) {
        self.pages += other.pages;
        self.items += other.items;
        self.inserted += other.inserted;
        self.merged += other.merged;
        self.unchanged += other.unchanged;
        self.dropped += other.dropped;
    }
}

pub struct Crawler {
    source: Arc<dyn PageSource>,
    store: Arc<dyn NewsStore>,
    extractor: Extractor,
    base_url: Url,
    clock: Clock,
}

impl Crawler {
    pub fn new(
        source: Arc<dyn PageSource>,
        store: Arc<dyn NewsStore>,
        base_url: Url,
    ) -> Result<Self> {
        Ok(Self {
            source,
            store,
            extractor: Extractor::new()?,
            base_url,
            clock: Arc::new(|| chrono::Local::now().naive_local()),
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Runs every iteration of `plan`. Transport and storage errors abort the run.
    #[instrument(skip(self, plan), fields(sections = plan.sections.len()))]
    pub async fn run(&self, plan: &CrawlPlan) -> Result<CrawlStats> {
        let mut total = CrawlStats::default();
        let end = plan.start_iteration.saturating_add(plan.iterations);
        for iteration in plan.start_iteration..end {
            let pages = page_range(iteration, plan.pages_per_iteration);
            info!(
                iteration = iteration + 1,
                first_page = *pages.start(),
                last_page = *pages.end(),
                "=== Iteration started ==="
            );
            for section in &plan.sections {
                total += self.crawl_section(section, pages.clone()).await?;
            }
        }
        info!(
            pages = total.pages,
            items = total.items,
            inserted = total.inserted,
            merged = total.merged,
            unchanged = total.unchanged,
            dropped = total.dropped,
            "Crawl finished"
        );
        Ok(total)
    }

    /// Walks `pages` of one section, stopping at the first unavailable page.
    pub async fn crawl_section(
        &self,
        section: &str,
        pages: RangeInclusive<u32>,
    ) -> Result<CrawlStats> {
        let mut stats = CrawlStats::default();
        for page in pages {
            info!(section, page, "Parsing page");
            let Some(html) = self.source.fetch_page(section, page).await? else {
                warn!(section, page, "Page not available, stopping section");
                break;
            };
            stats += self.crawl_page(section, &html).await?;
        }
        Ok(stats)
    }

    /// Extracts, dates and upserts every item of one listing page under `section`.
    pub async fn crawl_page(&self, section: &str, html: &str) -> Result<CrawlStats> {
        let now = (self.clock)();
        let items = self.extractor.extract(html, &self.base_url);
        let mut stats = CrawlStats {
            pages: 1,
            items: items.len() as u32,
            ..CrawlStats::default()
        };

        for item in items {
            let published_at = match parse_site_date(&item.date_text, now) {
                Ok(published_at) => published_at,
                Err(e) => {
                    warn!(section, link = %item.link, error = %e, "Dropping item with unparseable date");
                    stats.dropped += 1;
                    continue;
                }
            };

            let record = NewsRecord::new(item.title, published_at, item.link, section);
            match self.store.upsert(&record).await? {
                UpsertOutcome::Inserted => stats.inserted += 1,
                UpsertOutcome::Merged => stats.merged += 1,
                UpsertOutcome::Unchanged => stats.unchanged += 1,
            }
            info!(section, title = %record.title, "Saved news item");
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_range_default_plan() {
        assert_eq!(page_range(0, 3), 1..=3);
        assert_eq!(page_range(1, 3), 4..=6);
        assert_eq!(page_range(99, 3), 298..=300);
    }

    #[test]
    fn test_page_range_single_page() {
        assert_eq!(page_range(4, 1), 5..=5);
    }

    #[test]
    fn test_stats_accumulate() {
        let mut total = CrawlStats::default();
        total += CrawlStats {
            pages: 1,
            items: 4,
            inserted: 3,
            dropped: 1,
            ..CrawlStats::default()
        };
        total += CrawlStats {
            pages: 1,
            items: 2,
            merged: 1,
            unchanged: 1,
            ..CrawlStats::default()
        };
        assert_eq!(
            total,
            CrawlStats {
                pages: 2,
                items: 6,
                inserted: 3,
                merged: 1,
                unchanged: 1,
                dropped: 1,
            }
        );
    }
}
