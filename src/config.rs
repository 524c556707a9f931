//! Runtime configuration
//!
//! Everything comes from the environment. `BOT_TOKEN` is required and its
//! absence is fatal at startup; the cadence settings have defaults that
//! can be overridden per deployment.

use std::env;
use std::time::Duration;

use crate::core::{BotError, BotResult};

/// Server-side long-poll timeout for `getUpdates`
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// Heartbeat period
pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 300;

/// Delay before the first heartbeat
pub const DEFAULT_HEARTBEAT_INITIAL_DELAY_SECS: u64 = 10;

/// Configuration for a running bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot API access token
    pub token: String,

    /// Long-poll timeout passed to `getUpdates`
    pub poll_timeout_secs: u64,

    /// Period of the keep-alive heartbeat
    pub heartbeat_interval: Duration,

    /// Delay before the first heartbeat fires
    pub heartbeat_initial_delay: Duration,
}

impl BotConfig {
    /// Create a configuration with default cadences
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            heartbeat_interval: Duration::from_secs(DEFAULT_HEARTBEAT_INTERVAL_SECS),
            heartbeat_initial_delay: Duration::from_secs(DEFAULT_HEARTBEAT_INITIAL_DELAY_SECS),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `BOT_TOKEN` must be set and non-empty. `POLL_TIMEOUT_SECS`,
    /// `HEARTBEAT_INTERVAL_SECS` and `HEARTBEAT_INITIAL_DELAY_SECS` are
    /// optional overrides; unparsable values are ignored with a warning.
    pub fn from_env() -> BotResult<Self> {
        let token = env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(BotError::MissingToken)?;

        let mut config = Self::new(token);
        if let Some(secs) = read_secs("POLL_TIMEOUT_SECS") {
            config.poll_timeout_secs = secs;
        }
        if let Some(secs) = read_secs("HEARTBEAT_INTERVAL_SECS") {
            config.heartbeat_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = read_secs("HEARTBEAT_INITIAL_DELAY_SECS") {
            config.heartbeat_initial_delay = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Set the long-poll timeout
    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }

    /// Set the heartbeat cadence
    pub fn with_heartbeat(mut self, interval: Duration, initial_delay: Duration) -> Self {
        self.heartbeat_interval = interval;
        self.heartbeat_initial_delay = initial_delay;
        self
    }
}

fn read_secs(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}: '{}'", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::new("123:abc");
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.poll_timeout_secs, 30);
        assert_eq!(config.heartbeat_interval, Duration::from_secs(300));
        assert_eq!(config.heartbeat_initial_delay, Duration::from_secs(10));
    }

    #[test]
    fn test_builders() {
        let config = BotConfig::new("123:abc")
            .with_poll_timeout(5)
            .with_heartbeat(Duration::from_secs(60), Duration::from_secs(1));
        assert_eq!(config.poll_timeout_secs, 5);
        assert_eq!(config.heartbeat_interval, Duration::from_secs(60));
        assert_eq!(config.heartbeat_initial_delay, Duration::from_secs(1));
    }

    // Environment-dependent behavior is covered in one test to avoid
    // interference between parallel test threads.
    #[test]
    fn test_from_env_token_handling() {
        env::remove_var("BOT_TOKEN");
        assert!(matches!(
            BotConfig::from_env().unwrap_err(),
            BotError::MissingToken
        ));

        env::set_var("BOT_TOKEN", "   ");
        assert!(matches!(
            BotConfig::from_env().unwrap_err(),
            BotError::MissingToken
        ));

        env::set_var("BOT_TOKEN", "123:abc");
        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.poll_timeout_secs, DEFAULT_POLL_TIMEOUT_SECS);
        env::remove_var("BOT_TOKEN");
    }
}
