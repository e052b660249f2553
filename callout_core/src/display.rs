//! The live callout and what the presentation layer renders.

use callout_rules::{CalloutMessage, CalloutPriority};
use serde::{Deserialize, Serialize};

/// The callout occupying the display slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCallout {
    message: CalloutMessage,
    /// Seconds left before the slot clears, fade included.
    remaining: f32,
    fade_window: f32,
}

impl ActiveCallout {
    /// Start displaying `message` for `lifetime` seconds, the last
    /// `fade_window` of which fade out.
    pub fn new(message: CalloutMessage, lifetime: f32, fade_window: f32) -> Self {
        Self {
            message,
            remaining: lifetime,
            fade_window,
        }
    }

    pub fn message(&self) -> &CalloutMessage {
        &self.message
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn fade_window(&self) -> f32 {
        self.fade_window
    }

    /// Burn `dt` seconds of lifetime. Returns true once the callout is spent.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Opacity from 1.0 down to 0.0 over the final `fade_window` seconds.
    pub fn opacity(&self) -> f32 {
        if self.remaining > self.fade_window {
            1.0
        } else {
            (self.remaining / self.fade_window).max(0.0)
        }
    }

    /// Consume the slot, handing back the message.
    pub fn into_message(self) -> CalloutMessage {
        self.message
    }
}

/// Snapshot of what should be on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalloutDisplay<'a> {
    pub message: &'a CalloutMessage,
    pub opacity: f32,
}

impl<'a> CalloutDisplay<'a> {
    pub fn from_active(active: &'a ActiveCallout) -> Self {
        Self {
            message: active.message(),
            opacity: active.opacity(),
        }
    }

    pub fn text(&self) -> &'a str {
        &self.message.text
    }

    pub fn speaker(&self) -> &'a str {
        &self.message.speaker
    }

    pub fn priority(&self) -> CalloutPriority {
        self.message.priority
    }

    /// Check if the callout has entered its fade window.
    pub fn is_fading(&self) -> bool {
        self.opacity < 1.0
    }
}
