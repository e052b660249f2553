//! Error type for the fallible boundaries of the callout system.

use thiserror::Error;

/// Errors raised while parsing or validating callout input.
///
/// The scheduler itself never fails; these only come from the loosely typed
/// edges (strings, JSON, TOML) and from timing validation.
#[derive(Debug, Error)]
pub enum CalloutError {
    #[error("unknown callout priority: {0:?}")]
    UnknownPriority(String),

    #[error("invalid scheduler timing: {field} = {value}")]
    InvalidTiming { field: &'static str, value: f32 },

    #[error("failed to parse callout message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse scheduler timing: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CalloutError>;
