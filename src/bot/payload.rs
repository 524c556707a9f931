//! Opaque control payload encoding
//!
//! Every inline button carries the identity of its intended owner so a
//! third party cannot operate another user's controls:
//!
//! - start control: `ACT|<owner_id>|<activity_key>`
//! - close control: `END|<owner_id>`
//!
//! Fields are `|`-delimited and the owner id is decimal. Parsing never
//! panics: a wrong field count or a non-numeric owner is reported as
//! malformed, an unknown prefix as unrecognized.

use crate::core::{Denial, UserId};

/// A decoded control payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPayload {
    /// Request to start a leave for the given activity
    StartActivity {
        owner_id: UserId,
        /// Activity key as carried on the wire; validated by the tracker
        activity_key: String,
    },
    /// Request to close the owner's active leave
    EndLeave { owner_id: UserId },
}

impl ControlPayload {
    /// Start-control payload for one activity button
    pub fn start(owner_id: UserId, activity_key: impl Into<String>) -> Self {
        ControlPayload::StartActivity {
            owner_id,
            activity_key: activity_key.into(),
        }
    }

    /// Close-control payload
    pub fn end(owner_id: UserId) -> Self {
        ControlPayload::EndLeave { owner_id }
    }

    /// Encode to the wire form embedded in a button
    pub fn encode(&self) -> String {
        match self {
            ControlPayload::StartActivity {
                owner_id,
                activity_key,
            } => format!("ACT|{}|{}", owner_id, activity_key),
            ControlPayload::EndLeave { owner_id } => format!("END|{}", owner_id),
        }
    }

    /// Decode a payload received from a button press
    pub fn parse(raw: &str) -> Result<Self, Denial> {
        let malformed = || Denial::MalformedControlPayload {
            raw: raw.to_string(),
        };

        let fields: Vec<&str> = raw.split('|').collect();
        match fields.as_slice() {
            ["ACT", owner, key] => {
                let owner_id = owner.parse().map_err(|_| malformed())?;
                Ok(ControlPayload::StartActivity {
                    owner_id,
                    activity_key: (*key).to_string(),
                })
            }
            ["ACT", ..] => Err(malformed()),
            ["END", owner] => {
                let owner_id = owner.parse().map_err(|_| malformed())?;
                Ok(ControlPayload::EndLeave { owner_id })
            }
            ["END", ..] => Err(malformed()),
            _ => Err(Denial::UnrecognizedControl {
                raw: raw.to_string(),
            }),
        }
    }
}
