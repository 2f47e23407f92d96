//! Tower module - the stack of placed blocks
//!
//! The tower is a fixed-capacity stack so that placements never allocate.
//! Layer indices are assigned on push, which keeps `tower[i].layer == i`.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::MAX_TOWER_HEIGHT;

/// A placed block: a horizontal interval on a given layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Block {
    pub left: f64,
    pub width: f64,
    pub layer: u32,
}

impl Block {
    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Ordered stack of placed blocks, base first.
#[derive(Debug, Clone)]
pub struct Tower {
    blocks: ArrayVec<Block, MAX_TOWER_HEIGHT>,
}

#[allow(clippy::len_without_is_empty)]
impl Tower {
    /// Create a tower holding only the base block.
    pub fn new(base_left: f64, base_width: f64) -> Self {
        let mut tower = Self {
            blocks: ArrayVec::new(),
        };
        tower.reset(base_left, base_width);
        tower
    }

    /// Drop every block and put a fresh base at layer 0.
    pub fn reset(&mut self, base_left: f64, base_width: f64) {
        self.blocks.clear();
        self.blocks.push(Block {
            left: base_left,
            width: base_width,
            layer: 0,
        });
    }

    /// Append a block one layer above the current top.
    ///
    /// Returns `None` only when the tower is at capacity, which a validated
    /// config never reaches.
    pub fn push(&mut self, left: f64, width: f64) -> Option<Block> {
        let block = Block {
            left,
            width,
            layer: self.blocks.len() as u32,
        };
        self.blocks.try_push(block).ok()?;
        Some(block)
    }

    /// The most recently placed block (the base if nothing was placed).
    pub fn top(&self) -> Block {
        // reset() always leaves the base in place.
        self.blocks[self.blocks.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Placements above the base.
    pub fn level(&self) -> u32 {
        (self.blocks.len() - 1) as u32
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
