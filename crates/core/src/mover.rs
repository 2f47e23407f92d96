//! The active block sliding back and forth above the tower.

use serde::Serialize;

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mover {
    pub left: f64,
    pub width: f64,
    pub direction: Direction,
    /// Layer the mover will occupy once placed (tower length at spawn).
    pub layer: u32,
}

impl Mover {
    /// New mover fully off-field to the left, heading right.
    pub fn spawn(width: f64, layer: u32) -> Self {
        Self {
            left: -width,
            width,
            direction: Direction::Right,
            layer,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Advance one tick and reflect off the field edges.
    ///
    /// The right edge is checked before the left one, so a mover entering
    /// from off-field snaps to `0` on its first tick.
    pub fn advance(&mut self, speed: f64, field_width: f64) {
        self.left += speed * self.direction.sign();

        if self.left + self.width > field_width {
            self.left = field_width - self.width;
            self.direction = Direction::Left;
        }
        if self.left < 0.0 {
            self.left = 0.0;
            self.direction = Direction::Right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_starts_off_field_moving_right() {
        let m = Mover::spawn(220.0, 1);
        assert_eq!(m.left, -220.0);
        assert_eq!(m.right(), 0.0);
        assert_eq!(m.direction, Direction::Right);
        assert_eq!(m.layer, 1);
    }

    #[test]
    fn first_advance_clamps_to_left_edge() {
        let mut m = Mover::spawn(220.0, 1);
        m.advance(3.2, 360.0);
        assert_eq!(m.left, 0.0);
        assert_eq!(m.direction, Direction::Right);
    }

    #[test]
    fn reflects_off_right_edge() {
        let mut m = Mover {
            left: 139.0,
            width: 220.0,
            direction: Direction::Right,
            layer: 1,
        };
        m.advance(3.2, 360.0);
        assert_eq!(m.left, 140.0);
        assert_eq!(m.direction, Direction::Left);

        m.advance(3.2, 360.0);
        assert!((m.left - 136.8).abs() < 1e-9);
        assert_eq!(m.direction, Direction::Left);
    }

    #[test]
    fn reflects_off_left_edge() {
        let mut m = Mover {
            left: 1.0,
            width: 50.0,
            direction: Direction::Left,
            layer: 3,
        };
        m.advance(3.2, 360.0);
        assert_eq!(m.left, 0.0);
        assert_eq!(m.direction, Direction::Right);
    }

    #[test]
    fn stays_in_bounds_over_many_ticks() {
        let mut m = Mover::spawn(37.0, 5);
        for _ in 0..10_000 {
            m.advance(3.2, 360.0);
            assert!(m.left >= 0.0);
            assert!(m.right() <= 360.0);
        }
    }
}
