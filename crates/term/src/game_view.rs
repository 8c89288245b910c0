//! GameView: maps a [`ViewModel`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a bordered board (two terminal columns per board cell), a tilt
//! gauge under it, and a side panel with turn, bending and controls when the
//! viewport is wide enough.

use crate::core::{ViewModel, WeightView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Player, Shape, ShapeSize};

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

const CELL_W: u16 = 2;
const PANEL_GAP: u16 = 3;

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(28, 28, 36);
const FULCRUM: Rgb = Rgb::new(70, 70, 80);
const HUMAN: Rgb = Rgb::new(90, 170, 255);
const MACHINE: Rgb = Rgb::new(255, 140, 80);

/// A lightweight terminal renderer for the balance board.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Size of the board frame (border included) for `vm`.
    pub fn frame_size(&self, vm: &ViewModel) -> (u16, u16) {
        // +2 border, +1 gauge row under the board.
        (vm.width * CELL_W + 2, vm.height + 3)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, vm: &ViewModel, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        } else {
            fb.fill_rect(0, 0, fb.width(), fb.height(), ' ', CellStyle::default());
        }

        let (frame_w, frame_h) = self.frame_size(vm);
        let with_panel = viewport.width >= frame_w + PANEL_GAP + 20;
        let total_w = if with_panel { frame_w + PANEL_GAP + 20 } else { frame_w };
        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        let board_bg = CellStyle::new(FULCRUM, BOARD_BG);
        fb.fill_rect(x0 + 1, y0 + 1, vm.width * CELL_W, vm.height, ' ', board_bg);
        self.draw_border(fb, x0, y0, frame_w, vm.height + 2);
        self.draw_split(fb, vm, x0, y0);

        for w in &vm.weights {
            self.draw_weight(fb, w, x0, y0);
        }

        self.draw_gauge(fb, vm, x0, y0 + vm.height + 2);

        if with_panel {
            self.draw_panel(fb, vm, x0 + frame_w + PANEL_GAP, y0);
        }

        if !vm.status_label.is_empty() {
            let label = format!(" {} ", vm.status_label);
            let lx = x0 + frame_w.saturating_sub(label.len() as u16) / 2;
            let ly = y0 + (vm.height + 2) / 2;
            fb.put_str(lx, ly, &label, CellStyle::new(Rgb::new(255, 255, 255), BG).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, vm: &ViewModel, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(vm, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let right = x + w - 1;
        let bottom = y + h - 1;
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    /// Dotted guide between the halves; on odd widths it fills the fulcrum column.
    fn draw_split(&self, fb: &mut FrameBuffer, vm: &ViewModel, x0: u16, y0: u16) {
        let style = CellStyle::new(FULCRUM, BOARD_BG);
        let (left_end, right_start) = vm.split;
        let column = if right_start - left_end > 1 {
            Some((left_end + 1) as u16 * CELL_W)
        } else {
            None
        };
        let boundary = x0 + 1 + right_start as u16 * CELL_W - 1;
        for y in 0..vm.height {
            match column {
                Some(cx) => fb.put_str(x0 + 1 + cx, y0 + 1 + y, "┆┆", style),
                None => fb.put_char(boundary, y0 + 1 + y, '┆', style),
            }
        }
    }

    fn draw_weight(&self, fb: &mut FrameBuffer, w: &WeightView, x0: u16, y0: u16) {
        let (Ok(x), Ok(y)) = (u16::try_from(w.position.x), u16::try_from(w.position.y)) else {
            return;
        };
        let mut style = CellStyle::new(owner_color(w.owner), BOARD_BG);
        if w.active {
            style = style.bold();
        }
        let cx = x0 + 1 + x * CELL_W;
        let cy = y0 + 1 + y;
        fb.put_char(cx, cy, shape_glyph(w.shape, w.size), style);
        fb.put_char(cx + 1, cy, value_glyph(w.value), style);
    }

    /// One-row gauge: a marker slides from centre toward the heavier side.
    fn draw_gauge(&self, fb: &mut FrameBuffer, vm: &ViewModel, x0: u16, y: u16) {
        let span = vm.width * CELL_W + 2;
        let track = CellStyle::new(FULCRUM, BG);
        fb.fill_rect(x0, y, span, 1, '═', track);

        let half = (span / 2) as f32;
        let offset = (vm.tilt * (half - 1.0)).round() as i32;
        let marker_x = (half as i32 + offset).clamp(0, span as i32 - 1) as u16;
        let color = if vm.bending < 0 {
            HUMAN
        } else if vm.bending > 0 {
            MACHINE
        } else {
            Rgb::new(220, 220, 220)
        };
        fb.put_char(x0 + marker_x, y, '▲', CellStyle::new(color, BG).bold());
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, vm: &ViewModel, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(150, 150, 160), BG);
        let value = CellStyle::new(Rgb::new(240, 240, 240), BG).bold();

        fb.put_str(x, y, "TURN", label);
        match vm.turn {
            Some(player) => fb.put_str(
                x,
                y + 1,
                player_label(player),
                CellStyle::new(owner_color(player), BG).bold(),
            ),
            None => fb.put_str(x, y + 1, "-", value),
        }

        fb.put_str(x, y + 3, "BENDING", label);
        fb.put_str(x, y + 4, &format!("{:+}", vm.bending), value);

        fb.put_str(x, y + 6, "STATUS", label);
        fb.put_str(x, y + 7, vm.status.as_str(), value);

        let help = [
            "←/→  move",
            "↓    drop",
            "spc  play",
            "p    pause",
            "r    reset",
            "q    quit",
        ];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(x, y + 9 + i as u16, line, label);
        }
    }
}

fn owner_color(owner: Player) -> Rgb {
    match owner {
        Player::Human => HUMAN,
        Player::Machine => MACHINE,
    }
}

fn player_label(owner: Player) -> &'static str {
    match owner {
        Player::Human => "YOU",
        Player::Machine => "MACHINE",
    }
}

/// Small glyphs for light weights, filled glyphs for heavy ones.
fn shape_glyph(shape: Shape, size: ShapeSize) -> char {
    let heavy = matches!(size, ShapeSize::M | ShapeSize::L | ShapeSize::Xl);
    match (shape, heavy) {
        (Shape::Square, false) => '▫',
        (Shape::Square, true) => '■',
        (Shape::Triangle, false) => '▵',
        (Shape::Triangle, true) => '▲',
        (Shape::Circle, false) => '∘',
        (Shape::Circle, true) => '●',
    }
}

fn value_glyph(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_glyph() {
        assert_eq!(value_glyph(1), '1');
        assert_eq!(value_glyph(9), '9');
        assert_eq!(value_glyph(10), '+');
    }

    #[test]
    fn test_shape_glyph_weight_classes() {
        assert_eq!(shape_glyph(Shape::Square, ShapeSize::Xs), '▫');
        assert_eq!(shape_glyph(Shape::Circle, ShapeSize::Xl), '●');
        assert_eq!(shape_glyph(Shape::Triangle, ShapeSize::M), '▲');
    }
}
