//! Parsers for free-text replies: day counts, date pairs and search input.

use chrono::NaiveDate;

use crate::core::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keyword plus an optional inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub keyword: String,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

/// A positive integer number of days.
pub fn parse_day_count(text: &str) -> Result<u32, ValidationError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ValidationError::InvalidDayCount(trimmed.to_string())),
    }
}

/// Exactly two `YYYY-MM-DD` dates separated by whitespace. Order is not checked.
pub fn parse_date_range(text: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [start, end] => {
            let invalid = || ValidationError::InvalidDateRange(text.trim().to_string());
            let start = parse_date(start).ok_or_else(invalid)?;
            let end = parse_date(end).ok_or_else(invalid)?;
            Ok((start, end))
        }
        _ => Err(ValidationError::InvalidDateRange(text.trim().to_string())),
    }
}

/// `keyword` or `keyword YYYY-MM-DD YYYY-MM-DD`. Multi-word keywords are rejected.
pub fn parse_search(text: &str) -> Result<SearchInput, ValidationError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let invalid = || ValidationError::InvalidSearch(text.trim().to_string());
    match parts.as_slice() {
        [keyword] => Ok(SearchInput {
            keyword: keyword.to_string(),
            range: None,
        }),
        [keyword, start, end] => {
            let start = parse_date(start).ok_or_else(invalid)?;
            let end = parse_date(end).ok_or_else(invalid)?;
            Ok(SearchInput {
                keyword: keyword.to_string(),
                range: Some((start, end)),
            })
        }
        _ => Err(invalid()),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
