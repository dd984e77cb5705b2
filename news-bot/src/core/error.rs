//! Error types for the bot core.
//!
//! [`NewsBotError`] is the top-level error; [`ValidationError`] covers user-correctable free-text input.

use news_storage::StorageError;
use thiserror::Error;

/// Top-level error for dialog handling: store failures and transport failures.
#[derive(Error, Debug)]
pub enum NewsBotError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Bot error: {0}")]
    Bot(String),
}

/// Malformed free-text replies. The user is re-prompted; pending input is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid day count: {0}")]
    InvalidDayCount(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid search input: {0}")]
    InvalidSearch(String),
}

/// Result type for core operations; uses [`NewsBotError`].
pub type Result<T> = std::result::Result<T, NewsBotError>;
