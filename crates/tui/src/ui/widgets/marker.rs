//! The marker renderer: an emoji glyph above a pill-shaped name badge,
//! anchored along the bottom of the containing area.
//!
//! Rendering is a pure function of the marker, a [`Motion`] sample, the
//! theme, and the target area. All animation state lives with the caller;
//! the widget never reads the buffer it writes to, so repeated renders of
//! the same inputs produce identical cells.

use podium_types::{Anchor, Marker};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
};
use podium_util::display_width;

use super::{HaloWidget, clipped_cell};
use crate::animation::{Blend, Motion};
use crate::ui::theme::{MarkerPalette, Theme};

/// Columns between a side-anchored group and the area edge.
pub const SIDE_INSET: u16 = 2;
/// Rows between the pill row and the bottom of the area.
pub const BOTTOM_MARGIN: u16 = 1;

const MAX_LIFT: u16 = 2;
const GLOW_STRENGTH: f32 = 0.6;
const PILL_CAP_LEFT: &str = "▐";
const PILL_CAP_RIGHT: &str = "▌";

/// Cell-grid frame of one marker for a given motion sample.
///
/// The group rect is the stable two-row footprint (glyph row above pill
/// row); the bounce crest lifts `glyph_y` one row above it without moving
/// the group, so the halo stays anchored while the glyph hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLayout {
    pub group: Rect,
    pub pill_x: u16,
    pub pill_y: u16,
    pub pill_width: u16,
    pub glyph_x: u16,
    pub glyph_y: u16,
    pub glyph_width: u16,
    pub pad: u16,
}

impl MarkerLayout {
    /// Computes the frame, or `None` when the area has no cells.
    ///
    /// Horizontal anchoring depends only on the marker's anchor and the
    /// group width. Emphasis widens the pill padding from 1 to 2 cells and
    /// lifts the whole group by up to [`MAX_LIFT`] rows.
    pub fn compute(marker: &Marker, motion: Motion, area: Rect) -> Option<Self> {
        if area.is_empty() {
            return None;
        }

        let pad = 1u16.mix(&2, motion.emphasis);
        let name_width = display_width(&marker.name);
        let glyph_width = display_width(&marker.glyph).max(1);
        let pill_width = name_width.saturating_add(2 * pad + 2);
        let group_width = pill_width.max(glyph_width);

        let x = match marker.anchor {
            Anchor::Left => area.x.saturating_add(SIDE_INSET),
            Anchor::Center => area.x.saturating_add(area.width.saturating_sub(group_width) / 2),
            Anchor::Right => area
                .x
                .saturating_add(area.width.saturating_sub(SIDE_INSET.saturating_add(group_width))),
        };

        let lift = 0u16.mix(&MAX_LIFT, motion.emphasis);
        let bottom_row = area.bottom().saturating_sub(1);
        let pill_y = bottom_row.saturating_sub(BOTTOM_MARGIN + lift);
        let bounce_lift = if (0.25..0.75).contains(&motion.bounce) { 1 } else { 0 };
        let glyph_y = pill_y.saturating_sub(1 + bounce_lift);

        Some(Self {
            group: Rect::new(x, pill_y.saturating_sub(1), group_width, 2),
            pill_x: x.saturating_add((group_width - pill_width) / 2),
            pill_y,
            pill_width,
            glyph_x: x.saturating_add((group_width - glyph_width) / 2),
            glyph_y,
            glyph_width,
            pad,
        })
    }
}

/// Renders one marker with its motion sample into a buffer.
pub struct MarkerWidget<'a> {
    marker: &'a Marker,
    motion: Motion,
    theme: &'a dyn Theme,
}

impl<'a> MarkerWidget<'a> {
    pub fn new(marker: &'a Marker, motion: Motion, theme: &'a dyn Theme) -> Self {
        Self { marker, motion, theme }
    }

    fn draw_glyph(&self, layout: &MarkerLayout, palette: &MarkerPalette, clip: Rect, buf: &mut Buffer) {
        let y = layout.glyph_y;
        let glyph_end = layout.glyph_x + layout.glyph_width;

        let glow = self
            .theme
            .roles()
            .surface
            .mix(&palette.glow, self.motion.emphasis * GLOW_STRENGTH);
        for x in [layout.glyph_x.saturating_sub(1), glyph_end] {
            if let Some(cell) = clipped_cell(buf, clip, x, y) {
                cell.set_bg(glow);
            }
        }

        for x in layout.glyph_x..glyph_end {
            if let Some(cell) = clipped_cell(buf, clip, x, y) {
                cell.set_symbol(" ").set_bg(palette.glyph_backdrop);
            }
        }

        if !self.marker.glyph.is_empty() && clip.contains(Position::new(layout.glyph_x, y)) {
            let style = Style::default().fg(self.theme.roles().text).bg(palette.glyph_backdrop);
            let max_width = clip.right().saturating_sub(layout.glyph_x) as usize;
            buf.set_stringn(layout.glyph_x, y, &self.marker.glyph, max_width, style);
            // wide glyphs reset their trailing cells; restore the backdrop
            for x in layout.glyph_x + 1..glyph_end {
                if let Some(cell) = clipped_cell(buf, clip, x, y) {
                    cell.set_bg(palette.glyph_backdrop);
                }
            }
        }
    }

    fn draw_pill(&self, layout: &MarkerLayout, palette: &MarkerPalette, clip: Rect, buf: &mut Buffer) {
        let y = layout.pill_y;
        let left_cap = layout.pill_x;
        let right_cap = layout.pill_x + layout.pill_width - 1;

        if let Some(cell) = clipped_cell(buf, clip, left_cap, y) {
            cell.set_symbol(PILL_CAP_LEFT).set_fg(palette.pill_bg);
        }
        for x in left_cap + 1..right_cap {
            if let Some(cell) = clipped_cell(buf, clip, x, y) {
                cell.set_symbol(" ").set_fg(palette.pill_fg).set_bg(palette.pill_bg);
            }
        }
        if let Some(cell) = clipped_cell(buf, clip, right_cap, y) {
            cell.set_symbol(PILL_CAP_RIGHT).set_fg(palette.pill_bg);
        }

        if !self.marker.name.is_empty() {
            let name_x = left_cap + 1 + layout.pad;
            if clip.contains(Position::new(name_x, y)) {
                let max_width = clip.right().saturating_sub(name_x) as usize;
                let style = Style::default().fg(palette.pill_fg).bg(palette.pill_bg);
                buf.set_stringn(name_x, y, &self.marker.name, max_width, style);
            }
        }
    }
}

impl Widget for MarkerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = MarkerLayout::compute(self.marker, self.motion, area) else {
            return;
        };
        let clip = area.intersection(buf.area);
        if clip.is_empty() {
            return;
        }

        let palette = self.theme.neutral().mixed(self.theme.attention(), self.motion.emphasis);

        // halo first so the group paints over its inner edge
        if let Some(phase) = self.motion.ring {
            HaloWidget::new(layout.group, phase, palette.ring, self.theme.roles().surface).render(clip, buf);
        }
        self.draw_glyph(&layout, &palette, clip, buf);
        self.draw_pill(&layout, &palette, clip, buf);
    }
}
