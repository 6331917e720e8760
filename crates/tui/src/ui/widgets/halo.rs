//! Expanding halo ring drawn around an emphasized marker group.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use super::clipped_cell;
use crate::animation::Blend;

const CORNER_TOP_LEFT: &str = "╭";
const CORNER_TOP_RIGHT: &str = "╮";
const CORNER_BOTTOM_LEFT: &str = "╰";
const CORNER_BOTTOM_RIGHT: &str = "╯";
const EDGE_HORIZONTAL: &str = "─";
const EDGE_VERTICAL: &str = "│";

/// Rounded outline that expands away from a group rect and fades as the
/// ring phase advances. The phase comes from a repeating pulse, so the
/// ring restarts tight and bright every cycle. Callers draw it only while
/// a ring phase exists; there is no hidden state for an absent ring.
#[derive(Debug, Clone, Copy)]
pub struct HaloWidget {
    group: Rect,
    phase: f32,
    color: Color,
    fade_to: Color,
}

impl HaloWidget {
    pub fn new(group: Rect, phase: f32, color: Color, fade_to: Color) -> Self {
        Self {
            group,
            phase: phase.clamp(0.0, 1.0),
            color,
            fade_to,
        }
    }

    /// Outline rect for the current phase. Spread is asymmetric because a
    /// terminal cell is roughly twice as tall as it is wide.
    fn ring_rect(&self) -> Rect {
        let h_spread = 1 + (self.phase * 4.0) as u16;
        let v_spread = 1 + (self.phase * 2.0) as u16;
        let x = self.group.x.saturating_sub(h_spread);
        let y = self.group.y.saturating_sub(v_spread);
        let right = self.group.right().saturating_add(h_spread);
        let bottom = self.group.bottom().saturating_add(v_spread);
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

impl Widget for HaloWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let clip = area.intersection(buf.area);
        if clip.is_empty() {
            return;
        }
        let ring = self.ring_rect();
        if ring.width < 2 || ring.height < 2 {
            return;
        }

        let fg = self.fade_to.mix(&self.color, 1.0 - self.phase);
        let top = ring.top();
        let bottom = ring.bottom() - 1;
        let left = ring.left();
        let right = ring.right() - 1;

        let mut paint = |x: u16, y: u16, symbol: &str| {
            if let Some(cell) = clipped_cell(buf, clip, x, y) {
                cell.set_symbol(symbol).set_fg(fg);
            }
        };

        paint(left, top, CORNER_TOP_LEFT);
        paint(right, top, CORNER_TOP_RIGHT);
        paint(left, bottom, CORNER_BOTTOM_LEFT);
        paint(right, bottom, CORNER_BOTTOM_RIGHT);
        for x in left + 1..right {
            paint(x, top, EDGE_HORIZONTAL);
            paint(x, bottom, EDGE_HORIZONTAL);
        }
        for y in top + 1..bottom {
            paint(left, y, EDGE_VERTICAL);
            paint(right, y, EDGE_VERTICAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: Color = Color::Rgb(0xF7, 0xC9, 0x6E);
    const SURFACE: Color = Color::Rgb(0x16, 0x1C, 0x2A);

    fn rendered(phase: f32) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
        HaloWidget::new(Rect::new(10, 5, 6, 2), phase, RING, SURFACE).render(buf.area, &mut buf);
        buf
    }

    #[test]
    fn hugs_the_group_at_phase_zero() {
        let buf = rendered(0.0);
        assert_eq!(buf[(9, 4)].symbol(), CORNER_TOP_LEFT);
        assert_eq!(buf[(16, 4)].symbol(), CORNER_TOP_RIGHT);
        assert_eq!(buf[(9, 7)].symbol(), CORNER_BOTTOM_LEFT);
        assert_eq!(buf[(16, 7)].symbol(), CORNER_BOTTOM_RIGHT);
        assert_eq!(buf[(10, 4)].symbol(), EDGE_HORIZONTAL);
        assert_eq!(buf[(9, 5)].symbol(), EDGE_VERTICAL);
    }

    #[test]
    fn spreads_outward_as_phase_advances() {
        let buf = rendered(0.5);
        assert_eq!(buf[(7, 3)].symbol(), CORNER_TOP_LEFT);
        assert_eq!(buf[(18, 3)].symbol(), CORNER_TOP_RIGHT);
        assert_eq!(buf[(7, 8)].symbol(), CORNER_BOTTOM_LEFT);
        assert_eq!(buf[(18, 8)].symbol(), CORNER_BOTTOM_RIGHT);
        assert_eq!(buf[(9, 4)].symbol(), " ");
    }

    #[test]
    fn fades_from_full_color_toward_the_surface() {
        let fresh = rendered(0.0);
        assert_eq!(fresh[(9, 4)].fg, RING);

        let spent = {
            let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
            HaloWidget::new(Rect::new(10, 5, 6, 2), 1.0, RING, SURFACE).render(buf.area, &mut buf);
            buf
        };
        assert_eq!(spent[(5, 2)].fg, SURFACE);
    }

    #[test]
    fn leaves_cell_backgrounds_untouched() {
        let buf = rendered(0.0);
        let empty = Buffer::empty(Rect::new(0, 0, 1, 1));
        assert_eq!(buf[(9, 4)].bg, empty[(0, 0)].bg);
    }

    #[test]
    fn clips_near_the_origin_without_panicking() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 4));
        HaloWidget::new(Rect::new(0, 0, 4, 2), 0.75, RING, SURFACE).render(buf.area, &mut buf);
    }

    #[test]
    fn ignores_zero_sized_buffers() {
        let mut buf = Buffer::empty(Rect::ZERO);
        HaloWidget::new(Rect::new(2, 2, 4, 2), 0.25, RING, SURFACE).render(buf.area, &mut buf);
    }
}
