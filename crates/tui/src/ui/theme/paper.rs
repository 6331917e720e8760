use ratatui::style::Color;

use super::roles::{MarkerPalette, StageRoles, Theme};

// Paper palette: warm light theme for bright terminals.
pub const BG: Color = Color::Rgb(0xF4, 0xF1, 0xEA); // #f4f1ea
pub const SURFACE: Color = Color::Rgb(0xEC, 0xE7, 0xDC); // #ece7dc
pub const BORDER: Color = Color::Rgb(0xC9, 0xC2, 0xB2); // #c9c2b2
pub const INK: Color = Color::Rgb(0x2B, 0x29, 0x24); // #2b2924
pub const MUTED: Color = Color::Rgb(0x8A, 0x84, 0x74); // #8a8474
pub const TERRACOTTA: Color = Color::Rgb(0xC2, 0x5E, 0x2E); // #c25e2e

/// Light truecolor theme.
#[derive(Debug, Clone)]
pub struct PaperTheme {
    roles: StageRoles,
    neutral: MarkerPalette,
    attention: MarkerPalette,
}

impl PaperTheme {
    pub fn new() -> Self {
        Self {
            roles: StageRoles {
                background: BG,
                surface: SURFACE,
                border: BORDER,
                text: INK,
                text_muted: MUTED,
                accent: TERRACOTTA,
            },
            neutral: MarkerPalette {
                pill_bg: Color::Rgb(0xDE, 0xD8, 0xC9),
                pill_fg: Color::Rgb(0x5A, 0x55, 0x48),
                glyph_backdrop: SURFACE,
                glow: Color::Rgb(0xD9, 0xD2, 0xC0),
                ring: BORDER,
            },
            attention: MarkerPalette {
                pill_bg: TERRACOTTA,
                pill_fg: Color::Rgb(0xFD, 0xF9, 0xF0),
                glyph_backdrop: Color::Rgb(0xEA, 0xD3, 0xC2),
                glow: Color::Rgb(0xE8, 0x9A, 0x5B),
                ring: TERRACOTTA,
            },
        }
    }
}

impl Theme for PaperTheme {
    fn roles(&self) -> &StageRoles {
        &self.roles
    }

    fn neutral(&self) -> &MarkerPalette {
        &self.neutral
    }

    fn attention(&self) -> &MarkerPalette {
        &self.attention
    }
}
