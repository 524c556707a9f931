//! Update polling loop and background heartbeat
//!
//! The dispatcher long-polls `getUpdates` and routes each update to the
//! handlers, one at a time. The heartbeat runs as a separate task on a
//! fixed period and never touches tracker state.

use std::time::Duration;

use crate::config::BotConfig;
use crate::core::BotResult;
use crate::telegram::{TelegramClient, Update};

use super::handlers::Handlers;

/// Delay before retrying after a failed poll
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Owns the update loop of a running bot
pub struct Dispatcher {
    client: TelegramClient,
    handlers: Handlers<TelegramClient>,
    config: BotConfig,
    offset: i64,
}

impl Dispatcher {
    pub fn new(client: TelegramClient, config: BotConfig) -> Self {
        Self {
            handlers: Handlers::new(client.clone()),
            client,
            config,
            offset: 0,
        }
    }

    /// Run until the process is stopped.
    ///
    /// Spawns the heartbeat, then polls forever. Poll failures are logged
    /// and retried after a short delay; they never terminate the loop.
    pub async fn run(mut self) -> BotResult<()> {
        spawn_heartbeat(
            self.config.heartbeat_initial_delay,
            self.config.heartbeat_interval,
        );

        tracing::info!("Dispatcher started, polling for updates");

        loop {
            match self
                .client
                .get_updates(self.offset, self.config.poll_timeout_secs)
                .await
            {
                Ok(updates) => {
                    for update in updates {
                        self.offset = self.offset.max(update.update_id + 1);
                        self.dispatch(update).await;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "getUpdates failed: {}; retrying in {:?}",
                        e,
                        POLL_RETRY_DELAY
                    );
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                }
            }
        }
    }

    /// Route one update. Messages other than `/start` are ignored.
    async fn dispatch(&self, update: Update) {
        if let Some(message) = &update.message {
            let is_start = message
                .text
                .as_deref()
                .map(is_start_command)
                .unwrap_or(false);
            if is_start {
                self.handlers.handle_start_command(message).await;
            }
        } else if let Some(query) = &update.callback_query {
            self.handlers.handle_callback(query).await;
        }
    }
}

/// Match `/start`, with or without a bot mention or arguments
fn is_start_command(text: &str) -> bool {
    let text = text.trim();
    text == "/start"
        || text.starts_with("/start ")
        || text.starts_with("/start@")
}

/// Fixed-period keep-alive tick.
///
/// Purely a liveness signal in the log; no inputs, no outputs, no state.
fn spawn_heartbeat(initial_delay: Duration, interval: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(initial_delay).await;
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            tracing::info!("Auto-ping: bot masih hidup...");
        }
    });
}
