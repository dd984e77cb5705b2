//! News repository: persistence and filtered queries for news records.
//!
//! Uses SqliteConnector and the models (NewsRecord, FilterSelection, UpsertOutcome).
//! Every call opens its own connection, runs one statement, fetches everything and closes it.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteConnection, Connection};
use tracing::{debug, info};

use crate::connector::SqliteConnector;
use crate::error::StorageError;
use crate::models::{FilterSelection, NewsRecord, UpsertOutcome};
use crate::query_builder::{build_query, NewsQuery, QueryParam};
use crate::repository::NewsStore;

#[derive(Clone)]
pub struct NewsRepository {
    connector: SqliteConnector,
}

impl NewsRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let connector = SqliteConnector::new(database_url);
        let repo = Self { connector };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating news table if not exist");

        let mut conn = self.connector.connect().await?;
        let created = create_schema(&mut conn).await;
        let closed = conn.close().await;
        created?;
        closed?;

        info!("News table ready");
        Ok(())
    }

    /// Runs a built query and returns every row.
    pub async fn fetch(&self, query: &NewsQuery) -> Result<Vec<NewsRecord>, StorageError> {
        debug!(sql = %query.sql, params = query.params.len(), "Running news query");

        let mut q = sqlx::query_as::<_, NewsRecord>(&query.sql);
        for param in &query.params {
            q = match param {
                QueryParam::Text(s) => q.bind(s.clone()),
                QueryParam::Timestamp(t) => q.bind(*t),
            };
        }

        let mut conn = self.connector.connect().await?;
        let rows = q.fetch_all(&mut conn).await;
        let closed = conn.close().await;
        let rows = rows?;
        closed?;

        info!("Retrieved {} news records", rows.len());
        Ok(rows)
    }

    /// Returns the record with the given link, or None.
    pub async fn get_by_link(&self, link: &str) -> Result<Option<NewsRecord>, StorageError> {
        let mut conn = self.connector.connect().await?;
        let record = sqlx::query_as::<_, NewsRecord>(
            "SELECT title, published_at, link, category FROM news WHERE link = ?",
        )
        .bind(link)
        .fetch_optional(&mut conn)
        .await;
        let closed = conn.close().await;
        let record = record?;
        closed?;
        Ok(record)
    }

    /// Total number of rows.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let mut conn = self.connector.connect().await?;
        let total: Result<(i64,), sqlx::Error> = sqlx::query_as("SELECT COUNT(*) FROM news")
            .fetch_one(&mut conn)
            .await;
        let closed = conn.close().await;
        let total = total?;
        closed?;
        Ok(total.0)
    }
}

async fn create_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS news (
            title TEXT NOT NULL,
            published_at TEXT NOT NULL,
            link TEXT NOT NULL UNIQUE,
            category TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_news_published_at ON news(published_at)")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[async_trait]
impl NewsStore for NewsRepository {
    async fn find(
        &self,
        selection: &FilterSelection,
        now: NaiveDateTime,
    ) -> Result<Vec<NewsRecord>, StorageError> {
        let query = build_query(selection, now)?;
        self.fetch(&query).await
    }

    async fn upsert(&self, record: &NewsRecord) -> Result<UpsertOutcome, StorageError> {
        // The DO UPDATE only fires when the category is not already a substring;
        // RETURNING yields nothing for that no-op case.
        let sql = r#"
            INSERT INTO news (title, published_at, link, category)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(link) DO UPDATE
            SET category = news.category || ', ' || excluded.category
            WHERE instr(news.category, excluded.category) = 0
            RETURNING category
            "#;

        let mut conn = self.connector.connect().await?;
        let returned: Result<Option<String>, sqlx::Error> = sqlx::query_scalar(sql)
            .bind(&record.title)
            .bind(record.published_at)
            .bind(&record.link)
            .bind(&record.category)
            .fetch_optional(&mut conn)
            .await;
        let closed = conn.close().await;
        let returned = returned?;
        closed?;

        let outcome = match returned {
            None => UpsertOutcome::Unchanged,
            Some(category) if category == record.category => UpsertOutcome::Inserted,
            Some(_) => UpsertOutcome::Merged,
        };

        info!(
            link = %record.link,
            category = %record.category,
            outcome = ?outcome,
            "Upserted news record"
        );
        Ok(outcome)
    }
}
