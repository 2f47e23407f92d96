use arrayvec::ArrayVec;
use serde::Serialize;

use crate::mover::Mover;
use crate::tower::Block;
use crate::types::{RunState, MAX_TOWER_HEIGHT};

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub field_width: f64,
    pub field_height: f64,
    pub layer_height: f64,
    pub win_target: u32,
    pub blocks: ArrayVec<Block, MAX_TOWER_HEIGHT>,
    pub mover: Option<Mover>,
    pub run_state: RunState,
    pub level: u32,
    pub message: Option<&'static str>,
    pub loop_running: bool,
    pub spawn_pending: bool,
    pub episode_id: u32,
    pub mover_id: u32,
    pub tick: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.field_width = 0.0;
        self.field_height = 0.0;
        self.layer_height = 0.0;
        self.win_target = 0;
        self.blocks.clear();
        self.mover = None;
        self.run_state = RunState::Setup;
        self.level = 0;
        self.message = None;
        self.loop_running = false;
        self.spawn_pending = false;
        self.episode_id = 0;
        self.mover_id = 0;
        self.tick = 0;
    }

    pub fn playable(&self) -> bool {
        self.run_state.is_running()
    }

    /// Cheap FNV-1a hash of what is visible, for redraw throttling.
    pub fn fingerprint(&self) -> u64 {
        fn mix(h: u64, v: u64) -> u64 {
            let mut h = h;
            for b in v.to_le_bytes() {
                h ^= b as u64;
                h = h.wrapping_mul(0x0000_0100_0000_01B3);
            }
            h
        }

        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for b in &self.blocks {
            h = mix(h, b.left.to_bits());
            h = mix(h, b.width.to_bits());
        }
        if let Some(m) = self.mover {
            h = mix(h, m.left.to_bits());
            h = mix(h, m.width.to_bits());
        }
        let state = match self.run_state {
            RunState::Setup => 0,
            RunState::Running => 1,
            RunState::Ended { win: false } => 2,
            RunState::Ended { win: true } => 3,
        };
        h = mix(h, state);
        h = mix(h, self.level as u64);
        mix(h, self.episode_id as u64)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            field_width: 0.0,
            field_height: 0.0,
            layer_height: 0.0,
            win_target: 0,
            blocks: ArrayVec::new(),
            mover: None,
            run_state: RunState::Setup,
            level: 0,
            message: None,
            loop_running: false,
            spawn_pending: false,
            episode_id: 0,
            mover_id: 0,
            tick: 0,
        };
        s.clear();
        s
    }
}
