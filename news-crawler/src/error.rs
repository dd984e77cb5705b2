//! Crawler error types.

use news_storage::StorageError;
use thiserror::Error;

/// Errors that abort a crawl run.
#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Date text from a listing page that matches none of the known shapes. Drops one item only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized date: {0}")]
pub struct DateParseError(pub String);

pub type Result<T> = std::result::Result<T, CrawlerError>;
