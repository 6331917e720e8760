use ratatui::style::Color;

use super::{Ansi256Theme, MidnightTheme, PaperTheme, Theme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description rendered by the `themes` listing.
    pub description: &'static str,
    /// Color chips that summarize the palette.
    pub swatch: ThemeSwatch,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Minimal set of colors that summarize each palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
    pub pill: Color,
}

/// Ordered list of selectable themes surfaced by the cycler and loaders.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "midnight",
        label: "Midnight",
        description: "Cool slate default tuned for dark terminals.",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x0F, 0x14, 0x1E),
            accent: Color::Rgb(0x7A, 0xA2, 0xF7),
            pill: Color::Rgb(0xF7, 0xC9, 0x6E),
        },
        aliases: &["midnight", "dark"],
        is_ansi_fallback: false,
        factory: || Box::new(MidnightTheme::new()),
    },
    ThemeDefinition {
        id: "paper",
        label: "Paper",
        description: "Warm parchment palette for bright terminals.",
        swatch: ThemeSwatch {
            background: Color::Rgb(0xF4, 0xF1, 0xEA),
            accent: Color::Rgb(0xC2, 0x5E, 0x2E),
            pill: Color::Rgb(0xC2, 0x5E, 0x2E),
        },
        aliases: &["paper", "light"],
        is_ansi_fallback: false,
        factory: || Box::new(PaperTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        swatch: ThemeSwatch {
            background: Color::Indexed(234),
            accent: Color::Indexed(110),
            pill: Color::Indexed(214),
        },
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by canonical id.
pub fn find_by_id(id: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.id.eq_ignore_ascii_case(id))
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized)) || definition.id.eq_ignore_ascii_case(&normalized)
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == "midnight")
        .expect("midnight theme registered")
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .expect("ansi256 theme registered")
}
