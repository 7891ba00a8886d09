use std::time::{Duration, Instant};

use super::motion_state::Direction;

/// One-shot deferred direction flip
///
/// Scheduled when the strip reaches an edge. It fires once its deadline has
/// passed, no matter what the pointer did in the meantime; only
/// [`EdgeTimer::cancel`] (used at unmount) prevents it.
#[derive(Debug, Default)]
pub struct EdgeTimer {
    /// When the flip becomes due
    deadline: Option<Instant>,
    /// Direction to switch to when the timer fires
    flip_to: Direction,
}

impl EdgeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, flip_to: Direction) {
        self.deadline = Some(now + delay);
        self.flip_to = flip_to;
    }

    /// Consume the timer if its deadline has passed, returning the new direction
    pub fn fire_if_due(&mut self, now: Instant) -> Option<Direction> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.flip_to)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the flip, `None` when nothing is scheduled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "edge_timer_tests.rs"]
mod edge_timer_tests;
