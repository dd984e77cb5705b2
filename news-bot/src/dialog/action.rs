//! Discrete user actions the dialog reacts to, decoded from transport input.

use crate::core::{Chat, User};

use super::menu::{Selection, LABEL_ALL_NEWS, LABEL_CHOOSE_CATEGORY, LABEL_NEWS, LABEL_SEARCH};

/// One thing the user did: a command, a menu tap, an inline selection or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Start,
    NewsMenu,
    ShowAll,
    ChooseCategory,
    SearchMenu,
    Select(Selection),
    Text(String),
}

impl UserAction {
    /// Decodes a text message. Commands and menu labels win over free text.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed == "/start" || trimmed.starts_with("/start ") || trimmed.starts_with("/start@") {
            return UserAction::Start;
        }
        match trimmed {
            LABEL_ALL_NEWS => UserAction::ShowAll,
            LABEL_CHOOSE_CATEGORY => UserAction::ChooseCategory,
            LABEL_SEARCH => UserAction::SearchMenu,
            LABEL_NEWS => UserAction::NewsMenu,
            _ => UserAction::Text(text.to_string()),
        }
    }

    /// Decodes an inline callback token.
    pub fn from_callback(token: &str) -> Self {
        UserAction::Select(Selection::parse(token))
    }
}

/// An action together with who sent it and where replies go.
#[derive(Debug, Clone)]
pub struct Incoming {
    pub user: User,
    pub chat: Chat,
    pub action: UserAction,
}
