//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and formatting,
//! so they can be shared by the core logic, the terminal view, and the
//! headless JSON output.
//!
//! # Play Field
//!
//! Positions are measured in abstract "units" along the horizontal axis,
//! matching the browser game this is modeled on (one unit was one pixel):
//!
//! - **Width**: 360 units
//! - **Height**: 640 units
//! - **Layer height**: 30 units (one tower layer per terminal row)
//! - **Base block**: 220 units wide, centered
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MOVER_SPEED` | 3.2 | Mover displacement per tick, in units |
//! | `SPAWN_DELAY_MS` | 120 | Pause between a placement and the next mover |
//!
//! # Winning
//!
//! The run is won on the placement that puts `WIN_LAYERS` blocks above the
//! base (the tower then holds `WIN_LAYERS + 1` blocks).
//!
//! # Examples
//!
//! ```
//! use tui_stacker_types::{Direction, GameAction, RunState, FIELD_WIDTH, WIN_LAYERS};
//!
//! assert_eq!(GameAction::Place.as_str(), "place");
//! assert_eq!(Direction::Left.sign(), -1.0);
//! assert!(RunState::Running.is_running());
//! assert!(RunState::Ended { win: true }.is_ended());
//!
//! assert_eq!(FIELD_WIDTH, 360.0);
//! assert_eq!(WIN_LAYERS, 20);
//! ```

use serde::Serialize;

/// Play field width in units.
pub const FIELD_WIDTH: f64 = 360.0;

/// Play field height in units.
pub const FIELD_HEIGHT: f64 = 640.0;

/// Height of one tower layer in units.
pub const LAYER_HEIGHT: f64 = 30.0;

/// Width of the base block placed at setup.
pub const BASE_WIDTH: f64 = 220.0;

/// Mover displacement per tick (units/tick).
pub const MOVER_SPEED: f64 = 3.2;

/// Number of placements above the base needed to win.
pub const WIN_LAYERS: u32 = 20;

/// Delay between a successful placement and the next mover spawn.
pub const SPAWN_DELAY_MS: u32 = 120;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Storage capacity of the tower (base included).
///
/// The win target must stay strictly below this.
pub const MAX_TOWER_HEIGHT: usize = 64;

/// Message shown when the tower reaches the win target.
pub const WIN_MESSAGE: &str = "You win!";

/// Message shown when a placement misses the block below.
pub const LOSS_MESSAGE: &str = "Game Over - press space to restart";

/// Horizontal travel direction of the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Multiplier applied to the mover speed (-1 or +1).
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Top-level phase of a run.
///
/// - **Setup**: constructed, nothing spawned yet
/// - **Running**: the mover slides and may be placed
/// - **Ended**: terminal; only a restart is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    Setup,
    Running,
    Ended { win: bool },
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, RunState::Ended { .. })
    }

    /// Terminal outcome, if the run has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RunState::Ended { win: true } => Some(Outcome::Win),
            RunState::Ended { win: false } => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Setup => "setup",
            RunState::Running => "running",
            RunState::Ended { win: true } => "won",
            RunState::Ended { win: false } => "lost",
        }
    }
}

/// The two terminal outcomes of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Result text exposed for display.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => WIN_MESSAGE,
            Outcome::Loss => LOSS_MESSAGE,
        }
    }
}

/// Input events the game controller consumes.
///
/// Ticks are driven separately by the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Drop the mover onto the tower
    Place,
    /// Reset the tower and start a new run
    Restart,
    /// Click/space: place while running, otherwise (re)start
    Activate,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Place => "place",
            GameAction::Restart => "restart",
            GameAction::Activate => "activate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_fits_a_full_tower() {
        // Base plus every winning layer must be visible at once.
        let layers = (WIN_LAYERS + 1) as f64;
        assert!(layers * LAYER_HEIGHT <= FIELD_HEIGHT);
        assert!(BASE_WIDTH < FIELD_WIDTH);
        assert!((WIN_LAYERS as usize) < MAX_TOWER_HEIGHT);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }

    #[test]
    fn run_state_outcome() {
        assert_eq!(RunState::Setup.outcome(), None);
        assert_eq!(RunState::Running.outcome(), None);
        assert_eq!(RunState::Ended { win: true }.outcome(), Some(Outcome::Win));
        assert_eq!(RunState::Ended { win: false }.outcome(), Some(Outcome::Loss));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Win.message(), WIN_MESSAGE);
        assert_eq!(Outcome::Loss.message(), LOSS_MESSAGE);
    }
}
