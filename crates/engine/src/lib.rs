//! Engine helpers built on top of `tui-stacker-core`.
//!
//! - [`clock`]: fixed-timestep frame clock for the interactive loop
//! - [`place`]: placement with typed reasons for ignored calls
//! - [`autopilot`]: scripted player used by the headless mode

pub mod autopilot;
pub mod clock;
pub mod place;

pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use place::{apply_place, PlaceError, PlaceReport};
