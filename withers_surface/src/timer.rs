// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot deadline timer driven by host time.

use core::time::Duration;

/// A timer with at most one pending deadline.
///
/// Scheduling replaces any pending deadline rather than queueing another, so
/// a stale expiry can never fire after the state it belonged to is gone. The
/// host drives time by calling [`FeedbackTimer::fire_if_due`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackTimer {
    deadline: Option<Duration>,
}

impl FeedbackTimer {
    /// Create an idle timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `after` past `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, after: Duration) {
        self.deadline = Some(now.saturating_add(after));
    }

    /// Disarm the timer. No-op if idle.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The pending deadline, if armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// True if a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the deadline has been reached, disarm and return `true`.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut t = FeedbackTimer::new();
        t.schedule(ms(100), ms(500));
        assert!(!t.fire_if_due(ms(599)));
        assert!(t.fire_if_due(ms(600)));
        assert!(!t.fire_if_due(ms(700)));
        assert!(!t.is_pending());
    }

    #[test]
    fn schedule_replaces_pending_deadline() {
        let mut t = FeedbackTimer::new();
        t.schedule(ms(0), ms(500));
        t.schedule(ms(300), ms(500));
        assert_eq!(t.deadline(), Some(ms(800)));
        assert!(!t.fire_if_due(ms(500)));
        assert!(t.fire_if_due(ms(800)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut t = FeedbackTimer::new();
        t.cancel();
        t.schedule(ms(0), ms(10));
        t.cancel();
        t.cancel();
        assert!(!t.fire_if_due(ms(1_000)));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut t = FeedbackTimer::new();
        t.schedule(Duration::MAX, ms(1));
        assert_eq!(t.deadline(), Some(Duration::MAX));
    }
}
