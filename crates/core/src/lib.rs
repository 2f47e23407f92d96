//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the stacking game's rules, state machine, and
//! simulation. It has no dependencies on terminal I/O, which makes it:
//!
//! - **Deterministic**: the same inputs and tick sequence give the same tower
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: it runs in the terminal, headless, or under a benchmark
//! - **Fast**: ticks and placements never allocate (the tower is fixed-capacity)
//!
//! # Module Structure
//!
//! - [`tower`]: placed blocks, base first
//! - [`mover`]: the sliding block and its edge reflection
//! - [`placement`]: overlap computation and the hit/miss decision
//! - [`game_state`]: the controller (`Setup -> Running -> Ended`)
//! - [`config`]: field dimensions, speed, and win target
//! - [`snapshot`]: per-frame view handed to renderers
//!
//! # Game Rules
//!
//! - A base block sits centered on layer 0.
//! - A mover enters from the left edge at the width of the top block and
//!   bounces between the field walls.
//! - Placing trims the mover to its overlap with the top block. No overlap
//!   (after rounding to whole units) loses the run.
//! - Stacking `win_target` blocks above the base wins.
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::{GameConfig, GameState, PlaceOutcome};
//! use tui_stacker_types::{RunState, TICK_MS};
//!
//! let mut game = GameState::new(GameConfig::default());
//! game.start();
//!
//! // Let the mover slide in, then drop it.
//! for _ in 0..30 {
//!     game.tick(TICK_MS);
//! }
//! let outcome = game.place();
//! assert!(matches!(outcome, PlaceOutcome::Stacked { .. }));
//! assert_eq!(game.level(), 1);
//! assert_eq!(game.run_state(), RunState::Running);
//! ```

pub mod config;
pub mod game_state;
pub mod mover;
pub mod placement;
pub mod snapshot;
pub mod tower;

pub use tui_stacker_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, PlaceOutcome};
pub use mover::Mover;
pub use placement::{overlap, resolve, round_half_up, Overlap, Placement};
pub use snapshot::GameSnapshot;
pub use tower::{Block, Tower};
