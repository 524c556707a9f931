//! reqwest-backed Telegram Bot API client

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::{BotError, BotResult};

use super::types::{ApiResponse, InlineKeyboardMarkup, Message, Update};

/// Default Bot API host
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for the handful of Bot API methods the bot uses.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the given bot token
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, TELEGRAM_API_BASE)
    }

    /// Create a client against a non-default API host
    ///
    /// Used to point the bot at a local test server or a proxy.
    pub fn with_base_url(token: &str, base: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}/bot{}", base.trim_end_matches('/'), token),
        }
    }

    /// POST one Bot API method and unwrap the response envelope
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> BotResult<T> {
        tracing::debug!("Calling Bot API method '{}'", method);

        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(&params)
            .send()
            .await?;

        let envelope: ApiResponse<T> = response.json().await?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            tracing::warn!("Bot API '{}' failed: {}", method, description);
            return Err(BotError::Api(description));
        }

        envelope
            .result
            .ok_or_else(|| BotError::api(format!("'{}' returned ok without a result", method)))
    }

    /// Long-poll for new updates.
    ///
    /// `offset` must be one past the last update already handled; Telegram
    /// then discards everything older. Blocks up to `timeout_secs` on the
    /// server side before returning an empty batch.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> BotResult<Vec<Update>> {
        self.call(
            "getUpdates",
            json!({
                "offset": offset,
                "timeout": timeout_secs,
            }),
        )
        .await
    }

    /// Send a text message, optionally with an inline keyboard
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboardMarkup>,
    ) -> BotResult<Message> {
        let mut params = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(keyboard) = keyboard {
            params["reply_markup"] = serde_json::to_value(keyboard)?;
        }
        self.call("sendMessage", params).await
    }

    /// Replace the text (and keyboard) of an existing message
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboardMarkup>,
    ) -> BotResult<()> {
        let mut params = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        if let Some(keyboard) = keyboard {
            params["reply_markup"] = serde_json::to_value(keyboard)?;
        }
        // The API returns the edited message; nothing downstream needs it
        let _: serde_json::Value = self.call("editMessageText", params).await?;
        Ok(())
    }

    /// Acknowledge a callback query so the client stops showing a spinner
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> BotResult<()> {
        let _: bool = self
            .call(
                "answerCallbackQuery",
                json!({ "callback_query_id": callback_query_id }),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_construction() {
        let client = TelegramClient::with_base_url("123:abc", "http://localhost:8081/");
        assert_eq!(client.base_url, "http://localhost:8081/bot123:abc");

        let client = TelegramClient::new("123:abc");
        assert_eq!(client.base_url, "https://api.telegram.org/bot123:abc");
    }
}
