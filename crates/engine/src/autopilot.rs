//! Autopilot: places the mover when it lines up with the top block.
//!
//! Drives the headless mode, the benches, and the end-to-end tests.

use tracing::trace;

use crate::core::{GameState, PlaceOutcome};
use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Largest `|mover.left - top.left|` still considered aligned.
    tolerance: f64,
}

impl Autopilot {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Tolerance of half a step, so every pass across the tower hits the
    /// alignment window exactly once.
    pub fn for_speed(mover_speed: f64) -> Self {
        Self::new(mover_speed / 2.0)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn should_place(&self, state: &GameState) -> bool {
        if !state.run_state().is_running() {
            return false;
        }
        let Some(mover) = state.mover() else {
            return false;
        };
        let top = state.tower().top();
        (mover.left - top.left).abs() <= self.tolerance
    }

    /// Advance one tick, then place if aligned.
    pub fn step(&self, state: &mut GameState, elapsed_ms: u32) -> Option<PlaceOutcome> {
        state.tick(elapsed_ms);
        if !self.should_place(state) {
            return None;
        }
        let outcome = state.place();
        trace!(?outcome, "autopilot placed");
        Some(outcome)
    }

    /// Run until the game ends or `max_ticks` elapse, reporting every placement.
    ///
    /// Starts the game if it is still in setup. Returns the number of ticks run.
    pub fn run(
        &self,
        state: &mut GameState,
        max_ticks: u32,
        mut on_place: impl FnMut(&GameState, PlaceOutcome),
    ) -> u32 {
        state.start();

        let mut ticks = 0;
        while ticks < max_ticks && state.run_state().is_running() {
            if let Some(outcome) = self.step(state, TICK_MS) {
                on_place(state, outcome);
            }
            ticks += 1;
        }
        ticks
    }
}
