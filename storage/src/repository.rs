//! Store trait used by the dialog layer and the crawler. [`crate::NewsRepository`] is the SQLite implementation.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::error::StorageError;
use super::models::{FilterSelection, NewsRecord, UpsertOutcome};

/// Async news store: filtered listing and crawl upsert.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Returns records matching `selection`, with relative dates resolved against `now`.
    async fn find(
        &self,
        selection: &FilterSelection,
        now: NaiveDateTime,
    ) -> Result<Vec<NewsRecord>, StorageError>;
    /// Inserts the record or merges its category into the existing row with the same link.
    async fn upsert(&self, record: &NewsRecord) -> Result<UpsertOutcome, StorageError>;
}
