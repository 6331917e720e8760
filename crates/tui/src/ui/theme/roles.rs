use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

use crate::animation::Blend;

/// Semantic color roles for the stage chrome.
#[derive(Debug, Clone, Copy)]
pub struct StageRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
}

/// Colors for one emphasis state of a marker.
///
/// Every theme provides two of these: a muted `neutral` palette and a bright
/// `attention` palette. Renderers blend between them with the emphasis
/// sample, landing exactly on one endpoint at rest and the other at full
/// emphasis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPalette {
    /// Fill of the name badge.
    pub pill_bg: Color,
    /// Text inside the name badge.
    pub pill_fg: Color,
    /// Backdrop behind the glyph row.
    pub glyph_backdrop: Color,
    /// Color the glyph backdrop blends toward while emphasized.
    pub glow: Color,
    /// Color of the halo ring outline.
    pub ring: Color,
}

impl MarkerPalette {
    /// Blends every field toward `target` by `t`.
    pub fn mixed(&self, target: &MarkerPalette, t: f32) -> MarkerPalette {
        MarkerPalette {
            pill_bg: self.pill_bg.mix(&target.pill_bg, t),
            pill_fg: self.pill_fg.mix(&target.pill_fg, t),
            glyph_backdrop: self.glyph_backdrop.mix(&target.glyph_backdrop, t),
            glow: self.glow.mix(&target.glow, t),
            ring: self.ring.mix(&target.ring, t),
        }
    }
}

/// Theme trait exposing semantic roles, marker palettes, and style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &StageRoles;

    /// Palette for markers at rest.
    fn neutral(&self) -> &MarkerPalette;

    /// Palette for fully emphasized markers.
    fn attention(&self) -> &MarkerPalette;

    fn text_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().accent } else { self.roles().border };
        Style::default().fg(color)
    }

    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }
}
