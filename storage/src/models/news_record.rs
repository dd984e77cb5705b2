//! News record model for persistence.
//!
//! Maps to the `news` table and is used by NewsRepository.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row from the news table; `link` is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NewsRecord {
    /// Headline as shown on the source listing.
    pub title: String,
    /// Publication time in the source's local time.
    pub published_at: NaiveDateTime,
    /// Absolute article URL; unique across the table.
    pub link: String,
    /// One category slug, or several joined with `", "` after repeated crawls.
    pub category: String,
}

impl NewsRecord {
    pub fn new(
        title: impl Into<String>,
        published_at: NaiveDateTime,
        link: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            published_at,
            link: link.into(),
            category: category.into(),
        }
    }
}

/// What an upsert did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The link was new; a row was inserted.
    Inserted,
    /// The link existed and the new category was appended.
    Merged,
    /// The link existed and already carried the category.
    Unchanged,
}
