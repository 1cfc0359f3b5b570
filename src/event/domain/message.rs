//! Event envelope carried by the challenge event stream.

use super::ChallengePayload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stream topic announcing a newly created challenge.
pub const CHALLENGE_CREATE_TOPIC: &str = "challenge.notification.create";

/// Stream topic announcing an update to an existing challenge.
pub const CHALLENGE_UPDATE_TOPIC: &str = "challenge.notification.update";

/// Envelope for one challenge-lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMessage {
    /// Stream topic the event was published on.
    pub topic: String,
    /// System that originated the event.
    pub originator: String,
    /// Publication timestamp.
    pub timestamp: DateTime<Utc>,
    /// Declared payload media type.
    #[serde(rename = "mime-type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Challenge payload.
    pub payload: ChallengePayload,
}

impl EventMessage {
    /// Returns `true` when the envelope topic announces challenge creation.
    #[must_use]
    pub fn is_create(&self) -> bool {
        self.topic == CHALLENGE_CREATE_TOPIC
    }
}
