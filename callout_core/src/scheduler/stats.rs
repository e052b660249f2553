//! Per-category counters for scheduler activity.

use callout_rules::CalloutPriority;
use serde::{Deserialize, Serialize};

/// Running totals of what the scheduler has done, indexed by category rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SchedulerStats {
    pub enqueued: [u64; CalloutPriority::COUNT],
    pub promoted: [u64; CalloutPriority::COUNT],
    pub expired: [u64; CalloutPriority::COUNT],
}

impl SchedulerStats {
    pub fn record_enqueued(&mut self, priority: CalloutPriority) {
        self.enqueued[priority.rank()] += 1;
    }

    pub fn record_promoted(&mut self, priority: CalloutPriority) {
        self.promoted[priority.rank()] += 1;
    }

    pub fn record_expired(&mut self, priority: CalloutPriority) {
        self.expired[priority.rank()] += 1;
    }

    pub fn total_enqueued(&self) -> u64 {
        self.enqueued.iter().sum()
    }

    pub fn total_promoted(&self) -> u64 {
        self.promoted.iter().sum()
    }

    pub fn total_expired(&self) -> u64 {
        self.expired.iter().sum()
    }
}
