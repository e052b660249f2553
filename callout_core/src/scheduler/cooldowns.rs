//! Global and per-category cooldown timers.

use callout_rules::{CalloutPriority, SchedulerTiming};
use serde::{Deserialize, Serialize};

/// Countdown timers gating promotion.
///
/// Values count down to zero and are clamped there; a timer at zero means
/// "ready". Category timers are indexed by [`CalloutPriority::rank`] and are
/// never removed, only driven back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CooldownTimers {
    global: f32,
    categories: [f32; CalloutPriority::COUNT],
}

impl CooldownTimers {
    /// Create timers with every cooldown at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining global cooldown.
    pub fn global(&self) -> f32 {
        self.global
    }

    /// Remaining cooldown for one category.
    pub fn category(&self, priority: CalloutPriority) -> f32 {
        self.categories[priority.rank()]
    }

    pub fn global_ready(&self) -> bool {
        self.global <= 0.0
    }

    /// Check if a category may be promoted, ignoring the global gate.
    pub fn category_ready(&self, priority: CalloutPriority) -> bool {
        self.category(priority) <= 0.0
    }

    /// Count every timer down by `dt`, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        self.global = (self.global - dt).max(0.0);
        for remaining in self.categories.iter_mut() {
            *remaining = (*remaining - dt).max(0.0);
        }
    }

    /// Restart the global timer and the timer of the promoted category.
    pub fn start(&mut self, priority: CalloutPriority, timing: &SchedulerTiming) {
        self.global = timing.global_cooldown;
        self.categories[priority.rank()] = timing.category_cooldown;
    }

    /// Categories currently off cooldown, in rank order.
    pub fn ready_categories(&self) -> impl Iterator<Item = CalloutPriority> + '_ {
        CalloutPriority::ALL
            .into_iter()
            .filter(move |p| self.category_ready(*p))
    }
}
