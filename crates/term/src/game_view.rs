//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The play field is drawn with one terminal row per tower layer (base at
//! the bottom) and one column per `units_per_col` horizontal units.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::level_color;
use crate::types::RunState;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FIELD_BG: Rgb = Rgb::new(24, 24, 34);
const BLOCK_CH: char = '█';

/// A lightweight terminal renderer for the stacking game.
pub struct GameView {
    /// Horizontal field units per terminal column.
    units_per_col: f64,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 360 units -> 36 columns, close to the 9:16 field once glyph aspect is counted.
        Self {
            units_per_col: 10.0,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Field geometry in terminal cells for one frame.
#[derive(Debug, Clone, Copy)]
struct FieldRect {
    x: u16,
    y: u16,
    cols: u16,
    rows: u16,
}

impl FieldRect {
    fn frame_w(&self) -> u16 {
        self.cols.saturating_add(2)
    }

    fn frame_h(&self) -> u16 {
        self.rows.saturating_add(2)
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        // Oversized fields are cropped to the viewport (left side, bottom rows).
        let cols = (snap.field_width / self.units_per_col).round().max(1.0) as u16;
        let rows = if snap.layer_height > 0.0 {
            (snap.field_height / snap.layer_height).floor().max(1.0) as u16
        } else {
            1
        };
        let cols = cols.min(viewport.width.saturating_sub(2)).max(1);
        let rows = rows.min(viewport.height.saturating_sub(2)).max(1);
        let mut rect = FieldRect {
            x: 0,
            y: 0,
            cols,
            rows,
        };
        rect.x = viewport.width.saturating_sub(rect.frame_w()) / 2;
        rect.y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rect.frame_h()) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            cols,
            rows,
            ' ',
            CellStyle::plain(FIELD_BG, FIELD_BG),
        );
        self.draw_border(fb, rect, border);

        for block in &snap.blocks {
            let color = level_color(block.layer, snap.win_target);
            self.draw_span(fb, rect, block.layer, block.left, block.width, color, false);
        }

        if let Some(m) = snap.mover {
            let color = level_color(m.layer, snap.win_target);
            self.draw_span(fb, rect, m.layer, m.left, m.width, color, true);
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        match snap.run_state {
            RunState::Setup => self.draw_overlay_text(fb, rect, "PRESS SPACE"),
            RunState::Ended { .. } => {
                if let Some(msg) = snap.message {
                    self.draw_overlay_text(fb, rect, msg);
                }
            }
            RunState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Column range `[start, end)` covered by a horizontal span, clipped to
    /// the field. Any visible span gets at least one column.
    fn columns(&self, left: f64, width: f64, cols: u16) -> Option<(u16, u16)> {
        let right = left + width;
        if width <= 0.0 || right <= 0.0 {
            return None;
        }
        let max = cols as f64;
        let start = (left / self.units_per_col).round().clamp(0.0, max);
        let end = (right / self.units_per_col).round().clamp(0.0, max);
        let (start, end) = (start as u16, end as u16);
        if start >= cols {
            return None;
        }
        Some((start, end.max(start + 1)))
    }

    fn draw_span(
        &self,
        fb: &mut FrameBuffer,
        rect: FieldRect,
        layer: u32,
        left: f64,
        width: f64,
        color: Rgb,
        bold: bool,
    ) {
        if layer >= rect.rows as u32 {
            return;
        }
        let Some((start, end)) = self.columns(left, width, rect.cols) else {
            return;
        };

        let y = rect.y + 1 + (rect.rows - 1 - layer as u16);
        let face = CellStyle {
            fg: color,
            bg: FIELD_BG,
            bold,
            dim: false,
        };
        for col in start..end {
            fb.put_char(rect.x + 1 + col, y, BLOCK_CH, face);
        }
        // Darker right edge hints at the block's depth.
        if end - start > 1 {
            let edge = CellStyle {
                fg: color.shade(65),
                ..face
            };
            fb.put_char(rect.x + end, y, BLOCK_CH, edge);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, rect: FieldRect, style: CellStyle) {
        let (x, y, w, h) = (rect.x, rect.y, rect.frame_w(), rect.frame_h());

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        rect: FieldRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.frame_w()).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = rect.y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        let n = fb.put_u32(panel_x, y, snap.level, value);
        fb.put_char(panel_x + n, y, '/', hint);
        fb.put_u32(panel_x + n + 1, y, snap.win_target, hint);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        let state = match snap.run_state {
            RunState::Setup => "READY",
            RunState::Running => "PLAYING",
            RunState::Ended { win: true } => "WON",
            RunState::Ended { win: false } => "LOST",
        };
        fb.put_str(panel_x, y, state, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "RUN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id + 1, value);
        y = y.saturating_add(2);

        for line in ["SPACE drop", "R     restart", "Q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, rect: FieldRect, text: &str) {
        let mid_y = rect.y.saturating_add(rect.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = rect.x.saturating_add(rect.frame_w().saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
