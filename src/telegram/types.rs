//! Wire types for the Telegram Bot API
//!
//! Only the fields this bot reads are modeled; unknown fields are ignored
//! on deserialization.

use serde::{Deserialize, Serialize};

/// Envelope every Bot API response is wrapped in
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    pub ok: bool,
    /// Payload, present when `ok` is true
    pub result: Option<T>,
    /// Human-readable error, present when `ok` is false
    #[serde(default)]
    pub description: Option<String>,
}

/// One inbound event from `getUpdates`
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier
    pub update_id: i64,
    /// Present for plain chat messages (commands included)
    #[serde(default)]
    pub message: Option<Message>,
    /// Present when an inline keyboard button was pressed
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// A chat message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A Telegram user
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// First and last name joined, matching Telegram's notion of "full name"
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// A button press on an inline keyboard
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Identifier to acknowledge via `answerCallbackQuery`
    pub id: String,
    /// The user who pressed the button
    pub from: User,
    /// The message the keyboard was attached to
    #[serde(default)]
    pub message: Option<Message>,
    /// The opaque payload the button carried
    #[serde(default)]
    pub data: Option<String>,
}

/// Inline keyboard attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Keyboard from explicit button rows
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Keyboard with a single button on a single row
    pub fn single(button: InlineKeyboardButton) -> Self {
        Self::new(vec![vec![button]])
    }
}

/// One inline keyboard button carrying an opaque callback payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}
