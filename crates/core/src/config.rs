//! Game configuration: field dimensions, mover speed, and win target.

use thiserror::Error;

use crate::types::{
    BASE_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, LAYER_HEIGHT, MAX_TOWER_HEIGHT, MOVER_SPEED,
    SPAWN_DELAY_MS, WIN_LAYERS,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("base width {base_width} does not fit in field width {field_width}")]
    BaseTooWide { base_width: f64, field_width: f64 },
    #[error("win target must be in 1..{max}, got {value}")]
    WinTargetOutOfRange { value: u32, max: usize },
    #[error("{layers} layers of height {layer_height} exceed field height {field_height}")]
    TowerTooTall {
        layers: u32,
        layer_height: f64,
        field_height: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub layer_height: f64,
    pub base_width: f64,
    /// Units per tick.
    pub mover_speed: f64,
    /// Placements above the base needed to win.
    pub win_target: u32,
    pub spawn_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            layer_height: LAYER_HEIGHT,
            base_width: BASE_WIDTH,
            mover_speed: MOVER_SPEED,
            win_target: WIN_LAYERS,
            spawn_delay_ms: SPAWN_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to the defaults for
    /// anything unset or unparsable.
    ///
    /// - `STACKER_FIELD_WIDTH`
    /// - `STACKER_BASE_WIDTH`
    /// - `STACKER_SPEED`
    /// - `STACKER_WIN_LAYERS`
    /// - `STACKER_SPAWN_DELAY_MS`
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let d = Self::default();
        Self {
            field_width: parsed("STACKER_FIELD_WIDTH").unwrap_or(d.field_width),
            base_width: parsed("STACKER_BASE_WIDTH").unwrap_or(d.base_width),
            mover_speed: parsed("STACKER_SPEED").unwrap_or(d.mover_speed),
            win_target: parsed("STACKER_WIN_LAYERS").unwrap_or(d.win_target),
            spawn_delay_ms: parsed("STACKER_SPAWN_DELAY_MS").unwrap_or(d.spawn_delay_ms),
            ..d
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("layer height", self.layer_height),
            ("base width", self.base_width),
            ("mover speed", self.mover_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.base_width > self.field_width {
            return Err(ConfigError::BaseTooWide {
                base_width: self.base_width,
                field_width: self.field_width,
            });
        }

        if self.win_target == 0 || self.win_target as usize >= MAX_TOWER_HEIGHT {
            return Err(ConfigError::WinTargetOutOfRange {
                value: self.win_target,
                max: MAX_TOWER_HEIGHT,
            });
        }

        let layers = self.win_target + 1;
        if layers as f64 * self.layer_height > self.field_height {
            return Err(ConfigError::TowerTooTall {
                layers,
                layer_height: self.layer_height,
                field_height: self.field_height,
            });
        }

        Ok(())
    }

    /// Left edge of the centered base block, rounded to a whole unit.
    pub fn base_left(&self) -> f64 {
        ((self.field_width - self.base_width) / 2.0).round()
    }
}
