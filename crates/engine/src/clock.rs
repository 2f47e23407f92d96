//! Fixed-timestep frame clock.
//!
//! Converts wall-clock time into a whole number of fixed ticks so the core
//! always advances in `TICK_MS` steps, whatever the input poll latency.

use std::time::Duration;

use crate::types::TICK_MS;

/// Upper bound on ticks replayed after a stall (e.g. a suspended terminal).
pub const MAX_CATCH_UP_TICKS: u32 = 8;

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FrameClock {
    pub fn new(tick_ms: u32) -> Self {
        Self {
            step: Duration::from_millis(tick_ms.max(1) as u64),
            accumulated: Duration::ZERO,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn step_ms(&self) -> u32 {
        self.step.as_millis() as u32
    }

    /// Add elapsed wall time and return how many ticks are due.
    ///
    /// Anything beyond `max_catch_up` ticks is dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0u32;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            due += 1;
            if due == self.max_catch_up {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        due
    }

    /// Time left until the next tick is due (input poll timeout).
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulated)
    }

    /// Drop any partial step, e.g. after the loop was blocked on a resize.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
