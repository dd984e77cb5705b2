//! Dialog controller: routes one user action through conversation state, the news store and the chunker.

use std::sync::Arc;

use chrono::NaiveDateTime;
use news_storage::{DateMode, FilterSelection, NewsStore};
use tracing::{error, info, instrument, warn};

use crate::chunker::{chunk_records, DEFAULT_MAX_CHUNK_LEN};
use crate::core::{Reply, Result, ValidationError};

use super::action::UserAction;
use super::menu::{self, PeriodOption, Selection};
use super::state::{PendingInput, Scope, StateStore, TextOutcome};

/// Source of "now" for relative date filters.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Owns the per-user state store and turns actions into replies.
pub struct DialogController {
    store: Arc<dyn NewsStore>,
    states: StateStore,
    max_chunk_len: usize,
    clock: Clock,
}

impl DialogController {
    pub fn new(store: Arc<dyn NewsStore>) -> Self {
        Self {
            store,
            states: StateStore::new(),
            max_chunk_len: DEFAULT_MAX_CHUNK_LEN,
            clock: Arc::new(local_now),
        }
    }

    pub fn with_max_chunk_len(mut self, max_chunk_len: usize) -> Self {
        self.max_chunk_len = max_chunk_len;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn states(&self) -> &StateStore {
        &self.states
    }

    /// Handles one action to completion. Store failures become a single failure notice.
    #[instrument(skip(self, action))]
    pub async fn handle(&self, user_id: i64, action: UserAction) -> Vec<Reply> {
        match self.dispatch(user_id, action).await {
            Ok(replies) => replies,
            Err(e) => {
                error!(error = %e, user_id, "Failed to handle action");
                vec![Reply::text(menu::TEXT_STORE_FAILURE)]
            }
        }
    }

    async fn dispatch(&self, user_id: i64, action: UserAction) -> Result<Vec<Reply>> {
        match action {
            UserAction::Start => {
                self.states.reset(user_id).await;
                info!(user_id, "step: conversation reset");
                Ok(vec![Reply::with_keyboard(menu::TEXT_WELCOME, menu::main_menu())])
            }
            UserAction::NewsMenu => {
                self.states.update(user_id, |s| s.clear_pending()).await;
                Ok(vec![Reply::with_keyboard(menu::TEXT_CHOOSE_OPTION, menu::news_menu())])
            }
            UserAction::ShowAll => {
                self.states.update(user_id, |s| s.clear_pending()).await;
                Ok(vec![Reply::with_keyboard(
                    menu::TEXT_CHOOSE_PERIOD,
                    menu::global_period_keyboard(),
                )])
            }
            UserAction::ChooseCategory => {
                self.states.update(user_id, |s| s.clear_pending()).await;
                Ok(vec![Reply::with_keyboard(
                    menu::TEXT_CHOOSE_CATEGORY,
                    menu::category_keyboard(),
                )])
            }
            UserAction::SearchMenu => {
                self.states
                    .update(user_id, |s| s.set_pending(PendingInput::KeywordSearch))
                    .await;
                Ok(vec![Reply::text(menu::TEXT_SEARCH_HELP)])
            }
            UserAction::Select(selection) => self.on_selection(user_id, selection).await,
            UserAction::Text(text) => self.on_text(user_id, &text).await,
        }
    }

    async fn on_selection(&self, user_id: i64, selection: Selection) -> Result<Vec<Reply>> {
        match selection {
            Selection::CategoryChosen(category) => {
                self.states
                    .update(user_id, |s| s.select_category(category))
                    .await;
                info!(user_id, category = category.slug(), "step: category selected");
                Ok(vec![Reply::with_keyboard(
                    format!(
                        "Вы выбрали категорию: {}. Теперь выберите период:",
                        category.label()
                    ),
                    menu::category_period_keyboard(),
                )])
            }
            Selection::GlobalPeriod(period) => {
                self.on_period(user_id, period, Scope::Global).await
            }
            Selection::CategoryPeriod(period) => {
                self.on_period(user_id, period, Scope::Category).await
            }
            Selection::Unknown(token) => {
                warn!(user_id, token = %token, "Unknown selection");
                Ok(vec![Reply::text(menu::TEXT_UNKNOWN_SELECTION)])
            }
        }
    }

    async fn on_period(
        &self,
        user_id: i64,
        period: PeriodOption,
        scope: Scope,
    ) -> Result<Vec<Reply>> {
        let category = match scope {
            Scope::Global => None,
            Scope::Category => match self.states.snapshot(user_id).await.category() {
                Some(category) => Some(category),
                None => return Ok(vec![Reply::text(menu::TEXT_NO_CATEGORY)]),
            },
        };

        let date_mode = match period {
            PeriodOption::Today => DateMode::Today,
            PeriodOption::LastFiveDays => DateMode::LastDays(5),
            PeriodOption::CustomDays => {
                self.states
                    .update(user_id, |s| s.set_pending(PendingInput::DayCount(scope)))
                    .await;
                return Ok(vec![Reply::text(menu::TEXT_ASK_DAYS)]);
            }
            PeriodOption::CustomRange => {
                self.states
                    .update(user_id, |s| s.set_pending(PendingInput::DateRange(scope)))
                    .await;
                return Ok(vec![Reply::text(menu::TEXT_ASK_RANGE)]);
            }
        };

        self.states.update(user_id, |s| s.clear_pending()).await;
        let selection = FilterSelection::all().with_date_mode(date_mode);
        let selection = match category {
            Some(category) => selection.with_category(category.slug()),
            None => selection,
        };
        self.run_query(user_id, &selection).await
    }

    async fn on_text(&self, user_id: i64, text: &str) -> Result<Vec<Reply>> {
        let outcome = self.states.update(user_id, |s| s.resolve_text(text)).await;
        match outcome {
            TextOutcome::Query(selection) => self.run_query(user_id, &selection).await,
            TextOutcome::Rejected { error, pending } => {
                info!(user_id, error = %error, pending = ?pending, "step: input rejected, re-prompting");
                Ok(vec![Reply::text(rejection_text(&error))])
            }
            TextOutcome::MissingCategory => Ok(vec![Reply::text(menu::TEXT_NO_CATEGORY)]),
        }
    }

    async fn run_query(&self, user_id: i64, selection: &FilterSelection) -> Result<Vec<Reply>> {
        let now = (self.clock)();
        let records = self.store.find(selection, now).await?;
        info!(
            user_id,
            results = records.len(),
            category = ?selection.category,
            keyword = ?selection.keyword,
            "step: query finished"
        );
        Ok(chunk_records(&records, self.max_chunk_len)
            .map(Reply::text)
            .collect())
    }
}

fn rejection_text(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::InvalidDayCount(_) => menu::TEXT_BAD_DAYS,
        ValidationError::InvalidDateRange(_) => menu::TEXT_BAD_RANGE,
        ValidationError::InvalidSearch(_) => menu::TEXT_BAD_SEARCH,
    }
}
