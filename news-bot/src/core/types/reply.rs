//! Outgoing reply: text plus an optional keyboard, independent of the transport.

use serde::{Deserialize, Serialize};

/// One button of an inline keyboard: visible label and the callback token it sends back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    pub token: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Keyboard attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyboard {
    /// Persistent reply keyboard; pressing a button sends its label as text.
    Menu(Vec<Vec<String>>),
    /// Buttons under the message; pressing one sends its token as a selection.
    Inline(Vec<Vec<InlineButton>>),
}

/// A single outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}
