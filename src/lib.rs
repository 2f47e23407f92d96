//! TUI Stacker (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_stacker::{core,engine,input,term,types}`
//! so the binary, integration tests, and benches share one import root.

pub use tui_stacker_core as core;
pub use tui_stacker_engine as engine;
pub use tui_stacker_input as input;
pub use tui_stacker_term as term;
pub use tui_stacker_types as types;
