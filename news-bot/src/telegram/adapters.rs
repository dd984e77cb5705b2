//! Converters from teloxide updates to core types and dialog [`Incoming`] actions.

use teloxide::types::{CallbackQuery, Message};

use crate::core::{Chat, ToCoreUser, User};
use crate::dialog::{Incoming, UserAction};

/// Telegram user to core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: if chat.is_private() {
            "private".to_string()
        } else {
            "group".to_string()
        },
    }
}

/// Text messages become menu actions or free text; other messages are ignored.
pub fn incoming_from_message(msg: &Message) -> Option<Incoming> {
    let text = msg.text()?;
    let user = msg
        .from
        .as_ref()
        .map(|u| TelegramUserWrapper(u).to_core())
        .unwrap_or_else(|| User::with_id(msg.chat.id.0));
    Some(Incoming {
        user,
        chat: core_chat(&msg.chat),
        action: UserAction::from_text(text),
    })
}

/// Callback queries with data become selections. Replies go to the chat of the
/// message carrying the keyboard, or to the user's private chat when it is gone.
pub fn incoming_from_callback(query: &CallbackQuery) -> Option<Incoming> {
    let data = query.data.as_deref()?;
    let user = TelegramUserWrapper(&query.from).to_core();
    let chat = query
        .message
        .as_ref()
        .map(|m| core_chat(m.chat()))
        .unwrap_or_else(|| Chat::private(user.id));
    Some(Incoming {
        user,
        chat,
        action: UserAction::from_callback(data),
    })
}
