//! Callout Scheduler - chooses which pending callout gets the display slot.
//!
//! Each call to [`CalloutScheduler::advance`] runs one tick:
//! 1. **Cooldowns**: global and category timers count down, floored at zero
//! 2. **Expiry**: the active callout loses `dt` of lifetime and clears at zero
//! 3. **Promotion**: with the slot empty and the global gate open, the oldest
//!    message of the highest-ranked ready category takes the slot
//! 4. **Pacing**: a promotion restarts the global timer and its category's
//!    timer

mod cooldowns;
mod stats;

pub use cooldowns::*;
pub use stats::*;

use callout_rules::{CalloutId, CalloutMessage, CalloutPriority, Result, SchedulerTiming};
use std::collections::VecDeque;

use crate::display::{ActiveCallout, CalloutDisplay};

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceOutcome {
    /// The callout whose lifetime ran out this tick.
    pub expired: Option<CalloutId>,
    /// The callout that took the display slot this tick.
    pub promoted: Option<CalloutId>,
}

/// Paces callouts onto a single display slot.
///
/// Not internally synchronised; hosts that tick from several threads must
/// serialise access themselves.
#[derive(Debug, Clone)]
pub struct CalloutScheduler {
    timing: SchedulerTiming,
    pending: VecDeque<CalloutMessage>,
    active: Option<ActiveCallout>,
    cooldowns: CooldownTimers,
    stats: SchedulerStats,
}

impl CalloutScheduler {
    /// Create a scheduler with the default timing.
    pub fn new() -> Self {
        Self::from_valid_timing(SchedulerTiming::default())
    }

    /// Create a scheduler with custom timing, rejecting unusable values.
    pub fn with_timing(timing: SchedulerTiming) -> Result<Self> {
        timing.validate()?;
        Ok(Self::from_valid_timing(timing))
    }

    fn from_valid_timing(timing: SchedulerTiming) -> Self {
        Self {
            timing,
            pending: VecDeque::new(),
            active: None,
            cooldowns: CooldownTimers::new(),
            stats: SchedulerStats::default(),
        }
    }

    /// Queue a message behind everything already pending.
    ///
    /// Has no effect on cooldowns or the active slot until the next tick.
    pub fn enqueue(&mut self, message: CalloutMessage) -> CalloutId {
        let id = message.id;
        tracing::trace!(
            %id,
            priority = %message.priority,
            speaker = %message.speaker,
            pending = self.pending.len() + 1,
            "callout enqueued"
        );
        self.stats.record_enqueued(message.priority);
        self.pending.push_back(message);
        id
    }

    /// Run one tick of `dt` elapsed seconds.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, dt: f32) -> AdvanceOutcome {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "invalid tick delta, clamping to zero");
            0.0
        };

        let mut outcome = AdvanceOutcome::default();

        self.cooldowns.tick(dt);

        if let Some(active) = self.active.as_mut() {
            if active.tick(dt) {
                if let Some(spent) = self.active.take() {
                    let message = spent.into_message();
                    tracing::debug!(
                        id = %message.id,
                        priority = %message.priority,
                        "callout expired"
                    );
                    self.stats.record_expired(message.priority);
                    outcome.expired = Some(message.id);
                }
            }
        }

        if self.active.is_none() {
            outcome.promoted = self.promote();
        }

        outcome
    }

    /// Move the best eligible pending message into the empty slot.
    fn promote(&mut self) -> Option<CalloutId> {
        let index = self.candidate_index()?;
        let message = self.pending.remove(index)?;

        let duration = message.effective_duration(self.timing.default_display_duration);
        let lifetime = self.timing.lifetime(duration);
        self.cooldowns.start(message.priority, &self.timing);
        self.stats.record_promoted(message.priority);

        tracing::debug!(
            id = %message.id,
            priority = %message.priority,
            speaker = %message.speaker,
            lifetime,
            pending = self.pending.len(),
            "callout promoted"
        );

        let id = message.id;
        self.active = Some(ActiveCallout::new(
            message,
            lifetime,
            self.timing.fade_duration,
        ));
        Some(id)
    }

    /// Queue index of the message promotion would pick right now.
    ///
    /// Categories are tried in rank order. A ready category with nothing
    /// queued falls through to the next one.
    fn candidate_index(&self) -> Option<usize> {
        if !self.cooldowns.global_ready() {
            return None;
        }

        self.cooldowns.ready_categories().find_map(|priority| {
            self.pending
                .iter()
                .position(|message| message.priority == priority)
        })
    }

    /// What to render this frame, if anything.
    pub fn current_display(&self) -> Option<CalloutDisplay<'_>> {
        self.active.as_ref().map(CalloutDisplay::from_active)
    }

    /// The message the next promotion would pick if the slot were empty.
    pub fn next_candidate(&self) -> Option<&CalloutMessage> {
        self.candidate_index().and_then(|i| self.pending.get(i))
    }

    pub fn active(&self) -> Option<&ActiveCallout> {
        self.active.as_ref()
    }

    /// Pending messages in queue order.
    pub fn pending(&self) -> impl Iterator<Item = &CalloutMessage> {
        self.pending.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending messages in one category.
    pub fn pending_count(&self, priority: CalloutPriority) -> usize {
        self.pending
            .iter()
            .filter(|message| message.priority == priority)
            .count()
    }

    /// Check if nothing is displayed and nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    pub fn global_cooldown(&self) -> f32 {
        self.cooldowns.global()
    }

    pub fn category_cooldown(&self, priority: CalloutPriority) -> f32 {
        self.cooldowns.category(priority)
    }

    pub fn cooldowns(&self) -> &CooldownTimers {
        &self.cooldowns
    }

    pub fn timing(&self) -> &SchedulerTiming {
        &self.timing
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    /// Drop every pending message and the active callout.
    ///
    /// Cooldowns keep running, so pacing carries over to whatever is
    /// enqueued next.
    pub fn clear(&mut self) {
        tracing::debug!(
            pending = self.pending.len(),
            active = self.active.is_some(),
            "callout queue cleared"
        );
        self.pending.clear();
        self.active = None;
    }
}

impl Default for CalloutScheduler {
    fn default() -> Self {
        Self::new()
    }
}
