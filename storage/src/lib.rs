//! Storage crate: news persistence, filter-to-SQL building and the crawl upsert.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – NewsRecord, FilterSelection, DateMode, UpsertOutcome
//! - [`query_builder`] – FilterSelection → parameterized NewsQuery
//! - [`repository`] – NewsStore trait
//! - [`news_repo`] – NewsRepository (SQLite)
//! - [`connector`] – SqliteConnector

mod connector;
mod error;
mod models;
mod news_repo;
mod query_builder;
mod repository;


pub use connector::SqliteConnector;
pub use error::StorageError;
pub use models::{DateMode, FilterSelection, NewsRecord, ResultOrder, UpsertOutcome};
pub use news_repo::NewsRepository;
pub use query_builder::{build_query, NewsQuery, QueryParam};
pub use repository::NewsStore;
