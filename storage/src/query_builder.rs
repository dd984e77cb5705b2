//! Query builder: turns a [`FilterSelection`] into parameterized SQL for the `news` table.
//!
//! Pure; no I/O. Every user-supplied value travels as a bound parameter, never as SQL text.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::StorageError;
use crate::models::{DateMode, FilterSelection, ResultOrder};

const SELECT_NEWS: &str = "SELECT title, published_at, link, category FROM news";

/// A value bound to one `?` placeholder, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Text(String),
    Timestamp(NaiveDateTime),
}

/// SQL text plus its ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

/// Builds the query for `selection`, resolving relative dates against `now`.
///
/// Clauses are ANDed. Any filter forces `ORDER BY published_at DESC`; the unfiltered
/// path only orders when `selection.order` asks for it.
pub fn build_query(
    selection: &FilterSelection,
    now: NaiveDateTime,
) -> Result<NewsQuery, StorageError> {
    let mut clauses: Vec<&'static str> = Vec::new();
    let mut params: Vec<QueryParam> = Vec::new();

    if let Some(category) = &selection.category {
        clauses.push("category REGEXP ?");
        params.push(QueryParam::Text(category_pattern(category)));
    }

    match selection.date_mode {
        DateMode::None => {}
        DateMode::Today => {
            clauses.push("published_at >= ?");
            params.push(QueryParam::Timestamp(now.date().and_time(NaiveTime::MIN)));
        }
        DateMode::LastDays(days) => {
            if days == 0 {
                return Err(StorageError::InvalidFilter(
                    "day count must be a positive integer".to_string(),
                ));
            }
            let since = now
                .checked_sub_signed(TimeDelta::days(i64::from(days)))
                .unwrap_or(NaiveDateTime::MIN);
            clauses.push("published_at >= ?");
            params.push(QueryParam::Timestamp(since));
        }
        DateMode::Range { start, end } => {
            let end_of_day = end.and_hms_nano_opt(23, 59, 59, 999_999_999).ok_or_else(|| {
                StorageError::InvalidFilter(format!("invalid range end: {}", end))
            })?;
            clauses.push("published_at BETWEEN ? AND ?");
            params.push(QueryParam::Timestamp(start.and_time(NaiveTime::MIN)));
            params.push(QueryParam::Timestamp(end_of_day));
        }
    }

    if let Some(keyword) = &selection.keyword {
        clauses.push("title REGEXP ?");
        params.push(QueryParam::Text(keyword_pattern(keyword)?));
    }

    let mut sql = String::from(SELECT_NEWS);
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    if !selection.is_unfiltered() || selection.order == ResultOrder::Descending {
        sql.push_str(" ORDER BY published_at DESC");
    }

    Ok(NewsQuery { sql, params })
}

/// Case-insensitive substring pattern for the category column.
fn category_pattern(category: &str) -> String {
    format!("(?i){}", regex::escape(category))
}

/// Case-insensitive whole-word pattern for the title column. Rejects empty and multi-word input.
fn keyword_pattern(keyword: &str) -> Result<String, StorageError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(StorageError::InvalidFilter("empty keyword".to_string()));
    }
    if keyword.split_whitespace().count() > 1 {
        return Err(StorageError::InvalidFilter(format!(
            "keyword must be a single word: {}",
            keyword
        )));
    }
    Ok(format!(r"(?i)\b{}\b", regex::escape(keyword)))
}
