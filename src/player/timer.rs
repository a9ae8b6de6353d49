//! Deadline-based scheduled tasks owned by the player.
//!
//! Nothing runs in the background: the event loop calls `Player::tick(now)`
//! and the player fires whatever is due. Cancelling a task is dropping it.

use std::time::{Duration, Instant};

/// A task that fires once at `due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    due: Instant,
}

impl OneShot {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// A task that fires every `period`. Missed periods collapse into one firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Return true when the task is due at `now` and schedule the next firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }
}
