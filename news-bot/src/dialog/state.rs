//! Per-user conversation state: sticky category plus at most one pending free-text expectation.
//!
//! [`StateStore`] keys [`ConversationState`] by user id. Entries are created on first contact,
//! reset by `/start` and never evicted.

use std::collections::HashMap;

use news_storage::{DateMode, FilterSelection};
use tokio::sync::Mutex;

use crate::core::ValidationError;

use super::input::{parse_date_range, parse_day_count, parse_search};
use super::menu::Category;

/// Whether a pending filter applies to everything or to the sticky category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Category,
}

/// What the next free-text message completes. One value per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingInput {
    DayCount(Scope),
    DateRange(Scope),
    KeywordSearch,
}

/// Result of feeding one free-text message into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    /// Input was valid; run this selection. Any pending marker has been cleared.
    Query(FilterSelection),
    /// Input was malformed. `pending` is still active (or `None` for an unprompted search).
    Rejected {
        error: ValidationError,
        pending: Option<PendingInput>,
    },
    /// A category-scoped marker fired with no sticky category; the marker was dropped.
    MissingCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    category: Option<Category>,
    pending: Option<PendingInput>,
}

impl ConversationState {
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn pending(&self) -> Option<PendingInput> {
        self.pending
    }

    /// Sets the sticky category and drops whatever input was pending.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.pending = None;
    }

    /// Replaces any pending input with `pending`.
    pub fn set_pending(&mut self, pending: PendingInput) {
        self.pending = Some(pending);
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Validates `text` against the pending marker (or as a search when none is set).
    ///
    /// The marker is cleared only on success; a rejected reply leaves it in place.
    pub fn resolve_text(&mut self, text: &str) -> TextOutcome {
        let Some(pending) = self.pending else {
            return match search_selection(text) {
                Ok(selection) => TextOutcome::Query(selection),
                Err(error) => TextOutcome::Rejected {
                    error,
                    pending: None,
                },
            };
        };

        let category = match scope_of(pending) {
            Some(Scope::Category) => match self.category {
                Some(category) => Some(category),
                None => {
                    self.pending = None;
                    return TextOutcome::MissingCategory;
                }
            },
            _ => None,
        };

        let parsed = match pending {
            PendingInput::DayCount(_) => parse_day_count(text).map(|days| {
                FilterSelection::all().with_date_mode(DateMode::LastDays(days))
            }),
            PendingInput::DateRange(_) => parse_date_range(text).map(|(start, end)| {
                FilterSelection::all().with_date_mode(DateMode::Range { start, end })
            }),
            PendingInput::KeywordSearch => search_selection(text),
        };

        match parsed {
            Ok(selection) => {
                self.pending = None;
                let selection = match category {
                    Some(category) => selection.with_category(category.slug()),
                    None => selection,
                };
                TextOutcome::Query(selection)
            }
            Err(error) => TextOutcome::Rejected {
                error,
                pending: Some(pending),
            },
        }
    }
}

fn scope_of(pending: PendingInput) -> Option<Scope> {
    match pending {
        PendingInput::DayCount(scope) | PendingInput::DateRange(scope) => Some(scope),
        PendingInput::KeywordSearch => None,
    }
}

fn search_selection(text: &str) -> Result<FilterSelection, ValidationError> {
    let input = parse_search(text)?;
    let selection = FilterSelection::all().with_keyword(input.keyword);
    Ok(match input.range {
        Some((start, end)) => selection.with_date_mode(DateMode::Range { start, end }),
        None => selection,
    })
}

/// Conversation states keyed by user id.
#[derive(Default)]
pub struct StateStore {
    states: Mutex<HashMap<i64, ConversationState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the user's state, creating it on first contact. The lock is held only for `f`.
    pub async fn update<R>(&self, user_id: i64, f: impl FnOnce(&mut ConversationState) -> R) -> R {
        let mut states = self.states.lock().await;
        f(states.entry(user_id).or_default())
    }

    /// Copy of the user's state (default if never seen).
    pub async fn snapshot(&self, user_id: i64) -> ConversationState {
        self.states
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drops sticky category and pending input for the user.
    pub async fn reset(&self, user_id: i64) {
        self.states.lock().await.insert(user_id, ConversationState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    #[test]
    fn test_invalid_day_count_keeps_marker_then_valid_is_honored() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::DayCount(Scope::Global));

        let outcome = state.resolve_text("abc");
        assert_eq!(
            outcome,
            TextOutcome::Rejected {
                error: ValidationError::InvalidDayCount("abc".to_string()),
                pending: Some(PendingInput::DayCount(Scope::Global)),
            }
        );
        assert_eq!(state.pending(), Some(PendingInput::DayCount(Scope::Global)));

        let outcome = state.resolve_text("10");
        assert_eq!(
            outcome,
            TextOutcome::Query(FilterSelection::all().with_date_mode(DateMode::LastDays(10)))
        );
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_repeated_invalid_input_reprompts_indefinitely() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::DateRange(Scope::Global));
        for _ in 0..5 {
            assert!(matches!(
                state.resolve_text("не дата"),
                TextOutcome::Rejected { .. }
            ));
        }
        assert_eq!(state.pending(), Some(PendingInput::DateRange(Scope::Global)));
    }

    #[test]
    fn test_category_scoped_range_uses_sticky_category() {
        let mut state = ConversationState::default();
        state.select_category(Category::Society);
        state.set_pending(PendingInput::DateRange(Scope::Category));

        let outcome = state.resolve_text("2024-12-01 2024-12-15");

        assert_eq!(
            outcome,
            TextOutcome::Query(
                FilterSelection::all()
                    .with_date_mode(DateMode::Range {
                        start: date(1),
                        end: date(15)
                    })
                    .with_category("society")
            )
        );
        assert_eq!(state.category(), Some(Category::Society));
    }

    #[test]
    fn test_global_marker_ignores_sticky_category() {
        let mut state = ConversationState::default();
        state.select_category(Category::Politics);
        state.set_pending(PendingInput::DayCount(Scope::Global));

        let outcome = state.resolve_text("3");

        assert_eq!(
            outcome,
            TextOutcome::Query(FilterSelection::all().with_date_mode(DateMode::LastDays(3)))
        );
    }

    #[test]
    fn test_selecting_category_clears_pending() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::DayCount(Scope::Global));
        state.select_category(Category::Economics);
        assert_eq!(state.pending(), None);
        assert_eq!(state.category(), Some(Category::Economics));
    }

    #[test]
    fn test_new_marker_supersedes_old() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::DayCount(Scope::Global));
        state.set_pending(PendingInput::KeywordSearch);
        assert_eq!(state.pending(), Some(PendingInput::KeywordSearch));
    }

    #[test]
    fn test_category_marker_without_category_is_dropped() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::DayCount(Scope::Category));

        assert_eq!(state.resolve_text("5"), TextOutcome::MissingCategory);
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_no_pending_text_is_keyword_search() {
        let mut state = ConversationState::default();

        assert_eq!(
            state.resolve_text("ДТП"),
            TextOutcome::Query(FilterSelection::all().with_keyword("ДТП"))
        );
        assert_eq!(
            state.resolve_text("ДТП 2024-12-01 2024-12-15"),
            TextOutcome::Query(FilterSelection::all().with_keyword("ДТП").with_date_mode(
                DateMode::Range {
                    start: date(1),
                    end: date(15)
                }
            ))
        );
    }

    #[test]
    fn test_no_pending_multi_word_is_rejected() {
        let mut state = ConversationState::default();
        assert_eq!(
            state.resolve_text("два слова"),
            TextOutcome::Rejected {
                error: ValidationError::InvalidSearch("два слова".to_string()),
                pending: None,
            }
        );
    }

    #[test]
    fn test_keyword_search_marker_kept_on_invalid_input() {
        let mut state = ConversationState::default();
        state.set_pending(PendingInput::KeywordSearch);
        assert!(matches!(
            state.resolve_text("два слова"),
            TextOutcome::Rejected {
                pending: Some(PendingInput::KeywordSearch),
                ..
            }
        ));
        assert_eq!(state.pending(), Some(PendingInput::KeywordSearch));
    }

    #[tokio::test]
    async fn test_state_store_isolates_users() {
        let store = StateStore::new();
        store
            .update(1, |s| s.set_pending(PendingInput::DayCount(Scope::Global)))
            .await;
        store.update(2, |s| s.select_category(Category::Incident)).await;

        let first = store.snapshot(1).await;
        let second = store.snapshot(2).await;
        assert_eq!(first.pending(), Some(PendingInput::DayCount(Scope::Global)));
        assert_eq!(first.category(), None);
        assert_eq!(second.pending(), None);
        assert_eq!(second.category(), Some(Category::Incident));
    }

    #[tokio::test]
    async fn test_state_store_reset() {
        let store = StateStore::new();
        store
            .update(7, |s| {
                s.select_category(Category::Politics);
                s.set_pending(PendingInput::DateRange(Scope::Category));
            })
            .await;
        store.reset(7).await;
        assert_eq!(store.snapshot(7).await, ConversationState::default());
    }
}
