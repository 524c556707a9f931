//! Inbound event handlers
//!
//! One handler per inbound trigger: the `/start` command and callback
//! button activations. Tracker state is committed under the mutex before
//! any outbound notification is attempted; send failures are logged and
//! never roll back state.

use chrono::Local;
use tokio::sync::Mutex;

use crate::telegram::{CallbackQuery, ChatTransport, Message};
use crate::tracker::{LeaveTracker, UserId};

use super::payload::ControlPayload;
use super::render::{self, DeniedAction};

/// Handler state: the tracker behind a mutex plus the outbound transport.
///
/// The dispatcher processes one update at a time, so the mutex is never
/// contended in practice; it keeps the map safe if handlers are ever
/// driven concurrently.
pub struct Handlers<T: ChatTransport> {
    transport: T,
    tracker: Mutex<LeaveTracker>,
}

impl<T: ChatTransport> Handlers<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            tracker: Mutex::new(LeaveTracker::new()),
        }
    }

    /// The transport handlers send through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `/start`: greet the user and offer the activity keyboard
    pub async fn handle_start_command(&self, message: &Message) {
        let user = match &message.from {
            Some(user) => user,
            None => {
                tracing::debug!("Ignoring /start without a sender");
                return;
            }
        };

        tracing::info!("User {} ({}) asked for the menu", user.id, user.full_name());

        let text = render::greeting(&user.full_name());
        let keyboard = render::activity_keyboard(user.id);
        if let Err(e) = self
            .transport
            .send_text(message.chat.id, &text, Some(keyboard))
            .await
        {
            tracing::warn!("Failed to send greeting: {}", e);
        }
    }

    /// A control button was activated
    pub async fn handle_callback(&self, query: &CallbackQuery) {
        // Acknowledge first so the client drops its spinner
        if let Err(e) = self.transport.answer_callback(&query.id).await {
            tracing::warn!("Failed to answer callback query {}: {}", query.id, e);
        }

        let message = match &query.message {
            Some(message) => message,
            None => {
                tracing::warn!("Callback query {} carries no message, ignoring", query.id);
                return;
            }
        };
        let chat_id = message.chat.id;
        let raw = query.data.as_deref().unwrap_or("");

        match ControlPayload::parse(raw) {
            Ok(ControlPayload::StartActivity {
                owner_id,
                activity_key,
            }) => {
                self.start_leave(chat_id, message.message_id, owner_id, &activity_key, query)
                    .await;
            }
            Ok(ControlPayload::EndLeave { owner_id }) => {
                self.end_leave(chat_id, message.message_id, owner_id, query)
                    .await;
            }
            Err(denial) => {
                tracing::warn!("Rejected control payload from user {}: {}", query.from.id, denial);
                let text = render::denial_text(&denial, DeniedAction::Start, &query.from.full_name());
                self.notify(chat_id, &text).await;
            }
        }
    }

    async fn start_leave(
        &self,
        chat_id: i64,
        message_id: i64,
        owner_id: UserId,
        activity_key: &str,
        query: &CallbackQuery,
    ) {
        let clicker = &query.from;

        // Commit state under the lock; clone the record so notifications
        // happen after the lock is released
        let outcome = {
            let mut tracker = self.tracker.lock().await;
            tracker
                .request_start(clicker.id, owner_id, activity_key, Local::now())
                .map(|record| record.clone())
        };

        match outcome {
            Ok(record) => {
                tracing::info!(
                    "Leave '{}' started for user {} until {:?}",
                    record.label,
                    record.owner_id,
                    record.deadline
                );
                let text = render::leave_started(&clicker.full_name(), &record);
                let keyboard = render::end_keyboard(owner_id);
                if let Err(e) = self
                    .transport
                    .edit_text(chat_id, message_id, &text, Some(keyboard))
                    .await
                {
                    tracing::warn!("Failed to edit confirmation message: {}", e);
                }
            }
            Err(denial) => {
                tracing::info!(
                    "Start denied for user {} (clicked by {}): {}",
                    owner_id,
                    clicker.id,
                    denial
                );
                let text = render::denial_text(&denial, DeniedAction::Start, &clicker.full_name());
                self.notify(chat_id, &text).await;
            }
        }
    }

    async fn end_leave(
        &self,
        chat_id: i64,
        message_id: i64,
        owner_id: UserId,
        query: &CallbackQuery,
    ) {
        let clicker = &query.from;

        let outcome = {
            let mut tracker = self.tracker.lock().await;
            tracker.request_end(clicker.id, owner_id, Local::now())
        };

        match outcome {
            Ok(closed) => {
                tracing::info!(
                    "Leave '{}' closed for user {} after {:.2} minutes",
                    closed.record.label,
                    closed.record.owner_id,
                    closed.duration_minutes()
                );
                let text = render::leave_finished(&clicker.full_name(), &closed);
                if let Err(e) = self
                    .transport
                    .edit_text(chat_id, message_id, &text, None)
                    .await
                {
                    tracing::warn!("Failed to edit completion message: {}", e);
                }
            }
            Err(denial) => {
                tracing::info!(
                    "End denied for user {} (clicked by {}): {}",
                    owner_id,
                    clicker.id,
                    denial
                );
                let text = render::denial_text(&denial, DeniedAction::End, &clicker.full_name());
                self.notify(chat_id, &text).await;
            }
        }
    }

    /// Send a plain notice, logging failures instead of propagating them
    async fn notify(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.transport.send_text(chat_id, text, None).await {
            tracing::warn!("Failed to send notice: {}", e);
        }
    }
}
