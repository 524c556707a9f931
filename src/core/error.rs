//! Bot error types

use thiserror::Error;

use super::UserId;

/// Process-level and transport errors
#[derive(Error, Debug)]
pub enum BotError {
    /// Required bot token missing at startup
    #[error("BOT_TOKEN is not set")]
    MissingToken,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bot API answered with ok=false
    #[error("Telegram API error: {0}")]
    Api(String),
}

impl BotError {
    /// Create an API error from a description string
    pub fn api(msg: impl Into<String>) -> Self {
        BotError::Api(msg.into())
    }
}

/// Result type alias for transport and startup operations
pub type BotResult<T> = Result<T, BotError>;

/// A rejected user action.
///
/// Every variant is non-fatal: the denial is rendered as a chat message and
/// the bot carries on. None of these mutate tracker state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// A control was activated by someone other than its embedded owner
    #[error("control owned by user {owner_id} activated by user {requester_id}")]
    OwnershipMismatch {
        /// Identity embedded in the control at creation time
        owner_id: UserId,
        /// Identity that actually activated the control
        requester_id: UserId,
    },

    /// A leave is already running for this user
    #[error("an active leave '{label}' already exists")]
    AlreadyActive {
        /// Label of the existing leave
        label: String,
    },

    /// The activity key is not in the static set
    #[error("unknown activity key '{key}'")]
    UnknownActivity {
        /// The rejected key
        key: String,
    },

    /// Close requested while no leave is active
    #[error("no active leave to close")]
    NoActivePermission,

    /// Payload has the wrong field shape or a non-numeric owner id
    #[error("malformed control payload '{raw}'")]
    MalformedControlPayload {
        /// The raw payload as received
        raw: String,
    },

    /// Payload matches neither known control prefix
    #[error("unrecognized control payload '{raw}'")]
    UnrecognizedControl {
        /// The raw payload as received
        raw: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BotError::MissingToken;
        assert_eq!(err.to_string(), "BOT_TOKEN is not set");

        let err = BotError::api("chat not found");
        assert_eq!(err.to_string(), "Telegram API error: chat not found");
    }

    #[test]
    fn test_denial_display() {
        let denial = Denial::OwnershipMismatch {
            owner_id: 42,
            requester_id: 7,
        };
        assert_eq!(
            denial.to_string(),
            "control owned by user 42 activated by user 7"
        );

        let denial = Denial::AlreadyActive {
            label: "beli makan".into(),
        };
        assert_eq!(denial.to_string(), "an active leave 'beli makan' already exists");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let bot_err: BotError = json_err.into();
        assert!(matches!(bot_err, BotError::Serialization(_)));
    }
}
