//! # Callout Rules
//!
//! The data side of the callout system: priority categories, the messages
//! producers hand to the scheduler, and the timing constants that pace them.
//! This crate holds no scheduling logic.

pub mod error;
pub mod message;
pub mod priority;
pub mod timing;

pub use error::*;
pub use message::*;
pub use priority::*;
pub use timing::*;
