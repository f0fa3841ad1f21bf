// src/engine/queue.rs

use std::time::Instant;

use tracing::debug;

use crate::audio::ActionId;

/// A deferred sound trigger: play `action` once `due_at` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub due_at: Instant,
    pub action: ActionId,
}

/// Queue of deferred actions, drained once per poll tick.
///
/// Semantics:
/// - `schedule` records an absolute trigger time; there is no ordering
///   guarantee among entries due at the same instant.
/// - `drain_due(now)` removes and returns every entry whose trigger time is
///   at or before `now`, leaving later entries untouched.
///
/// Draining is a single retain pass over the backing vector, so entries are
/// never removed from a collection while it is being iterated.
#[derive(Debug, Default)]
pub struct DelayQueue {
    pending: Vec<PendingAction>,
}

impl DelayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no pending actions.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Record a deferred action.
    pub fn schedule(&mut self, due_at: Instant, action: ActionId) {
        debug!(action = %action, "scheduling delayed action");
        self.pending.push(PendingAction { due_at, action });
    }

    /// Remove and return every action due at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<ActionId> {
        let mut due = Vec::new();
        self.pending.retain(|entry| {
            if entry.due_at <= now {
                due.push(entry.action.clone());
                false
            } else {
                true
            }
        });

        if !due.is_empty() {
            debug!(fired = due.len(), remaining = self.pending.len(), "drained due actions");
        }
        due
    }
}
