use ratatui::style::Color;

use super::roles::{MarkerPalette, StageRoles, Theme};

// Midnight palette
// Core
pub const BG: Color = Color::Rgb(0x0F, 0x14, 0x1E); // #0f141e - Background
pub const SURFACE: Color = Color::Rgb(0x16, 0x1C, 0x2A); // #161c2a - Stage surface
pub const BORDER: Color = Color::Rgb(0x2A, 0x33, 0x47); // #2a3347 - Borders/dividers
pub const FOREGROUND: Color = Color::Rgb(0xE6, 0xEB, 0xF4); // #e6ebf4 - Foreground text
pub const MUTED: Color = Color::Rgb(0x73, 0x7E, 0x96); // #737e96 - Hints/placeholders

// Accents
pub const PERIWINKLE: Color = Color::Rgb(0x7A, 0xA2, 0xF7); // #7aa2f7
pub const AMBER: Color = Color::Rgb(0xF7, 0xC9, 0x6E); // #f7c96e

// Marker states
pub const PILL_NEUTRAL_BG: Color = Color::Rgb(0x27, 0x30, 0x45); // muted slate badge
pub const PILL_NEUTRAL_FG: Color = Color::Rgb(0xAA, 0xB3, 0xC8);
pub const PILL_ATTENTION_FG: Color = Color::Rgb(0x1A, 0x14, 0x06); // near-black on amber
pub const GLOW_DIM: Color = Color::Rgb(0x3A, 0x41, 0x55);

/// Dark truecolor default.
#[derive(Debug, Clone)]
pub struct MidnightTheme {
    roles: StageRoles,
    neutral: MarkerPalette,
    attention: MarkerPalette,
}

impl MidnightTheme {
    pub fn new() -> Self {
        Self {
            roles: StageRoles {
                background: BG,
                surface: SURFACE,
                border: BORDER,
                text: FOREGROUND,
                text_muted: MUTED,
                accent: PERIWINKLE,
            },
            neutral: MarkerPalette {
                pill_bg: PILL_NEUTRAL_BG,
                pill_fg: PILL_NEUTRAL_FG,
                glyph_backdrop: SURFACE,
                glow: GLOW_DIM,
                ring: BORDER,
            },
            attention: MarkerPalette {
                pill_bg: AMBER,
                pill_fg: PILL_ATTENTION_FG,
                glyph_backdrop: Color::Rgb(0x2E, 0x27, 0x14),
                glow: AMBER,
                ring: AMBER,
            },
        }
    }
}

impl Theme for MidnightTheme {
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
