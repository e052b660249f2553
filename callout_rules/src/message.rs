//! Callout messages as handed to the scheduler by producers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::priority::CalloutPriority;

/// Unique identifier for an enqueued callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalloutId(pub Uuid);

impl CalloutId {
    /// Create a new random callout ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a callout ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for CalloutId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CalloutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single callout: who says what, how urgently, and for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutMessage {
    #[serde(default)]
    pub id: CalloutId,
    pub priority: CalloutPriority,
    pub speaker: String,
    pub text: String,
    /// Display seconds. Zero or negative means the scheduler default.
    #[serde(default)]
    pub duration: f32,
}

impl CalloutMessage {
    /// Create a message that uses the default display duration.
    pub fn new(
        priority: CalloutPriority,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: CalloutId::new(),
            priority,
            speaker: speaker.into(),
            text: text.into(),
            duration: 0.0,
        }
    }

    /// Set an explicit display duration in seconds.
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    /// Display time for this message, falling back to `default` when no
    /// positive duration was given.
    pub fn effective_duration(&self, default: f32) -> f32 {
        if self.duration > 0.0 {
            self.duration
        } else {
            default
        }
    }

    /// Parse a message from JSON produced by scripted or external sources.
    ///
    /// `id` is generated and `duration` defaults to zero when absent. An
    /// unrecognised priority is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
