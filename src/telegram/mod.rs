//! Telegram Bot API transport
//!
//! A thin client for the handful of Bot API methods the bot needs:
//! - `TelegramClient` - reqwest-backed client (long polling + sends)
//! - `ChatTransport` - outbound seam so handlers can be tested offline
//! - Wire types for updates, messages and inline keyboards

pub mod client;
pub mod transport;
pub mod types;

pub use client::TelegramClient;
pub use transport::ChatTransport;
pub use types::{
    ApiResponse, CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, Update,
    User,
};
