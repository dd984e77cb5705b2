//! Page sources: where listing HTML comes from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::error::Result;

/// Desktop browser User-Agent sent when `CRAWLER_USER_AGENT` is unset.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Source of section listing pages. `Ok(None)` means the page is not available (non-200).
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, section: &str, page: u32) -> Result<Option<String>>;
}

/// Fetches pages over HTTP from `{base_url}/{section}/?PAGEN_1={page}`.
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, section: &str, page: u32) -> String {
        format!("{}/{}/?PAGEN_1={}", self.base_url, section, page)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    #[instrument(skip(self))]
    async fn fetch_page(&self, section: &str, page: u32) -> Result<Option<String>> {
        let url = self.page_url(section, page);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Fetched page");
        if status != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}
