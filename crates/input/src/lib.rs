//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! The game has a single "drop" verb, so there is no repeat/hold handling:
//! every press is one action.

pub mod map;

pub use tui_stacker_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
