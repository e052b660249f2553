//! Pacing constants for the callout scheduler.

use serde::{Deserialize, Serialize};

use crate::error::{CalloutError, Result};

/// Minimum gap in seconds between any two promoted callouts.
pub const GLOBAL_COOLDOWN: f32 = 3.0;

/// Minimum gap in seconds between two callouts of the same category.
pub const CATEGORY_COOLDOWN: f32 = 8.0;

/// Display time used when a message carries no positive duration.
pub const DEFAULT_DISPLAY_DURATION: f32 = 2.5;

/// Trailing seconds of a callout's life spent fading out.
pub const FADE_DURATION: f32 = 0.5;

/// Timing configuration for the scheduler.
///
/// All values are in seconds. The fade is appended after the display
/// duration, so a callout lives `duration + fade_duration` in total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerTiming {
    pub global_cooldown: f32,
    pub category_cooldown: f32,
    pub default_display_duration: f32,
    pub fade_duration: f32,
}

impl Default for SchedulerTiming {
    fn default() -> Self {
        Self {
            global_cooldown: GLOBAL_COOLDOWN,
            category_cooldown: CATEGORY_COOLDOWN,
            default_display_duration: DEFAULT_DISPLAY_DURATION,
            fade_duration: FADE_DURATION,
        }
    }
}

impl SchedulerTiming {
    /// Check that every value is usable.
    ///
    /// Cooldowns may be zero. Durations must be positive since the fade
    /// window divides the opacity.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("global_cooldown", self.global_cooldown),
            ("category_cooldown", self.category_cooldown),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalloutError::InvalidTiming { field, value });
            }
        }

        let positive = [
            ("default_display_duration", self.default_display_duration),
            ("fade_duration", self.fade_duration),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalloutError::InvalidTiming { field, value });
            }
        }

        Ok(())
    }

    /// Parse timing from a TOML table. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let timing: SchedulerTiming = toml::from_str(s)?;
        timing.validate()?;
        Ok(timing)
    }

    /// Total lifetime of a callout displayed for `duration` seconds.
    pub fn lifetime(&self, duration: f32) -> f32 {
        duration + self.fade_duration
    }
}
