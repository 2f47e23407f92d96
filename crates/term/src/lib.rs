//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal, without any widget/layout toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map continuous field units onto terminal columns, one row per layer
//! - Redraw only what changed

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod render_throttle;
pub mod renderer;

pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{hsl_to_rgb, level_color};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
