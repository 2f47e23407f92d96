//! Placement algorithm: intersect the mover with the block below.
//!
//! The overlap width is rounded to a whole unit *before* it is compared
//! against zero, so a sub-unit sliver of overlap (< 0.5) counts as a miss.
//! Rounding follows JavaScript's `Math.round` (halves go toward +infinity),
//! which differs from `f64::round` only for negative halves.

use crate::mover::Mover;
use crate::tower::Block;

/// Intersection of the mover with the top of the tower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub left: f64,
    pub right: f64,
    /// Rounded `right - left`; may be zero or negative.
    pub width: f64,
}

/// Result of resolving a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The mover, trimmed to the overlap, becomes the new top block.
    Stacked { left: f64, width: f64 },
    /// No whole unit of overlap: the run is lost.
    Missed,
}

/// Round half toward positive infinity.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

pub fn overlap(prev: &Block, mover: &Mover) -> Overlap {
    let left = prev.left.max(mover.left);
    let right = prev.right().min(mover.right());
    Overlap {
        left,
        right,
        width: round_half_up(right - left),
    }
}

pub fn resolve(prev: &Block, mover: &Mover) -> Placement {
    let o = overlap(prev, mover);
    if o.width <= 0.0 {
        Placement::Missed
    } else {
        Placement::Stacked {
            left: o.left,
            width: o.width,
        }
    }
}
