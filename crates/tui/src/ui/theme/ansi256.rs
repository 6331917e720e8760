use ratatui::style::Color;

use super::roles::{MarkerPalette, StageRoles, Theme};

/// Fallback theme for terminals without truecolor support.
///
/// Every color is drawn from the xterm 256 palette, so emphasis blends
/// snap between the neutral and attention endpoints instead of fading.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: StageRoles,
    neutral: MarkerPalette,
    attention: MarkerPalette,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: StageRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(235),
                border: Color::Indexed(238),
                text: Color::Indexed(255),
                text_muted: Color::Indexed(246),
                accent: Color::Indexed(110),
            },
            neutral: MarkerPalette {
                pill_bg: Color::Indexed(238),
                pill_fg: Color::Indexed(250),
                glyph_backdrop: Color::Indexed(235),
                glow: Color::Indexed(237),
                ring: Color::Indexed(238),
            },
            attention: MarkerPalette {
                pill_bg: Color::Indexed(214),
                pill_fg: Color::Indexed(232),
                glyph_backdrop: Color::Indexed(94),
                glow: Color::Indexed(214),
                ring: Color::Indexed(214),
            },
        }
    }
}

impl Theme for Ansi256Theme {
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
