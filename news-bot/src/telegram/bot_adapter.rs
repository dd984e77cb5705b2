//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use crate::core::{Bot as CoreBot, Chat, Keyboard, NewsBotError, Reply, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        ChatId, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
        ReplyMarkup,
    },
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Maps a transport-agnostic keyboard to Telegram markup.
pub fn to_reply_markup(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Menu(rows) => ReplyMarkup::Keyboard(
            KeyboardMarkup::new(rows.iter().map(|row| {
                row.iter()
                    .map(|label| KeyboardButton::new(label.clone()))
                    .collect::<Vec<_>>()
            }))
            .resize_keyboard(),
        ),
        Keyboard::Inline(rows) => ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(
            rows.iter().map(|row| {
                row.iter()
                    .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.token.clone()))
                    .collect::<Vec<_>>()
            }),
        )),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        let sent = match &reply.keyboard {
            Some(keyboard) => request.reply_markup(to_reply_markup(keyboard)).await,
            None => request.await,
        };
        sent.map_err(|e| NewsBotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InlineButton;

    #[test]
    fn test_inline_keyboard_keeps_tokens() {
        let keyboard = Keyboard::Inline(vec![vec![InlineButton::new("Сегодня", "news_today")]]);
        let ReplyMarkup::InlineKeyboard(markup) = to_reply_markup(&keyboard) else {
            panic!("expected inline keyboard markup");
        };
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0][0].text, "Сегодня");
    }

    #[test]
    fn test_menu_keyboard_rows() {
        let keyboard = Keyboard::Menu(vec![vec!["a".to_string()], vec!["b".to_string()]]);
        let ReplyMarkup::Keyboard(markup) = to_reply_markup(&keyboard) else {
            panic!("expected reply keyboard markup");
        };
        assert_eq!(markup.keyboard.len(), 2);
        assert_eq!(markup.keyboard[1][0].text, "b");
    }
}
