//! # Callout Core
//!
//! Decides which callout the player sees at any instant. Producers enqueue
//! messages as fast as they like; the host advances the scheduler once per
//! frame and renders whatever [`CalloutScheduler::current_display`] returns.
//!
//! ## Core Components
//!
//! - **scheduler**: pending queue, active slot, and the promotion policy
//! - **display**: the live callout and its fade-out opacity
//!
//! ## Pacing
//!
//! - **Global cooldown**: no two callouts promoted closer than a fixed gap
//! - **Category cooldown**: the same category waits longer before repeating,
//!   letting other categories interleave
//! - **Rank**: a cooldown-eligible higher category always wins; within a
//!   category messages are shown in arrival order

pub mod display;
pub mod scheduler;

pub use display::*;
pub use scheduler::*;

pub use callout_rules::{
    CalloutError, CalloutId, CalloutMessage, CalloutPriority, SchedulerTiming,
};
