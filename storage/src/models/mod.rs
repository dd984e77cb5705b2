//! Data models for the news store (records, filter selections, upsert outcomes).
//!
//! Used by the query builder, NewsRepository and callers of the storage API.

mod filter_selection;
mod news_record;

pub use filter_selection::{DateMode, FilterSelection, ResultOrder};
pub use news_record::{NewsRecord, UpsertOutcome};
