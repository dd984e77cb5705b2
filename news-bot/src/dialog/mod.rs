//! Conversational core: actions, menu catalog, free-text parsing, per-user state, controller.

pub mod action;
pub mod controller;
pub mod handler;
pub mod input;
pub mod menu;
pub mod state;

pub use action::{Incoming, UserAction};
pub use controller::{Clock, DialogController};
pub use handler::DialogHandler;
pub use input::SearchInput;
pub use menu::{Category, PeriodOption, Selection};
pub use state::{ConversationState, PendingInput, Scope, StateStore, TextOutcome};
