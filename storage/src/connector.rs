//! SQLite connection factory for the news store.
//!
//! Provides [`SqliteConnector`], which opens one short-lived connection per store call;
//! the database file is created if it does not exist and `REGEXP` is registered on every connection.

use log::info;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions,
};

/// Holds connect options; each call to [`SqliteConnector::connect`] opens a fresh connection.
#[derive(Clone)]
pub struct SqliteConnector {
    options: SqliteConnectOptions,
}

impl SqliteConnector {
    /// Creates a connector for the given database file path.
    pub fn new(database_url: &str) -> Self {
        info!("Using SQLite news store: {}", database_url);

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_url)
            .with_regexp();

        Self { options }
    }

    /// Opens a new connection. Callers close it when the statement is done.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }
}
