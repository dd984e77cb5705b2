//! Storage error types.
//!
//! Used by the query builder, the news repository and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when building or running news store operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}
