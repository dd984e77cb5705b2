//! Filter selection for listing news.
//!
//! Built by the dialog layer and turned into SQL by [`crate::build_query`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date restriction applied to `published_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateMode {
    #[default]
    None,
    /// From the start of the current day.
    Today,
    /// From `now - N days`; N must be positive.
    LastDays(u32),
    /// Inclusive calendar range. Not reordered when `start > end`.
    Range { start: NaiveDate, end: NaiveDate },
}

/// Ordering requested for the unfiltered path. Filtered queries are always newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResultOrder {
    #[default]
    Descending,
    Unspecified,
}

/// Filters composed with AND: category substring, date mode, whole-word keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSelection {
    /// Case-insensitive substring of the category field.
    pub category: Option<String>,
    pub date_mode: DateMode,
    /// Single word matched against the title on word boundaries.
    pub keyword: Option<String>,
    pub order: ResultOrder,
}

impl FilterSelection {
    /// No filters: every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date_mode(mut self, date_mode: DateMode) -> Self {
        self.date_mode = date_mode;
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    /// True when no category, date or keyword filter is set.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.date_mode == DateMode::None && self.keyword.is_none()
    }
}
