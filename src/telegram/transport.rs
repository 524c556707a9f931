//! Outbound transport seam
//!
//! Handlers talk to the chat platform through `ChatTransport` instead of
//! the concrete client, so tests can swap in a recording transport and the
//! guard logic can be exercised without a network.

use async_trait::async_trait;

use crate::core::BotResult;

use super::client::TelegramClient;
use super::types::InlineKeyboardMarkup;

/// The outbound side of the chat platform
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a new text message, optionally with an inline keyboard
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()>;

    /// Replace the text (and keyboard) of an existing message
    async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()>;

    /// Acknowledge a callback query
    async fn answer_callback(&self, callback_query_id: &str) -> BotResult<()>;
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()> {
        self.send_message(chat_id, text, keyboard.as_ref()).await?;
        Ok(())
    }

    async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()> {
        self.edit_message_text(chat_id, message_id, text, keyboard.as_ref())
            .await
    }

    async fn answer_callback(&self, callback_query_id: &str) -> BotResult<()> {
        self.answer_callback_query(callback_query_id).await
    }
}
