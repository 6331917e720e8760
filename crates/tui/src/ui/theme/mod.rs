//! Theme styling module for the TUI UI layer.
//!
//! This module defines two truecolor palettes (Midnight, Paper), an ANSI
//! 256-color fallback, semantic stage roles, per-marker palettes, and helper
//! builders for Ratatui widgets and styles. Prefer these helpers over
//! hard-coding colors to keep the UI consistent.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod midnight;
pub mod paper;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::{ThemeDefinition, ThemeSwatch};
pub use midnight::MidnightTheme;
pub use paper::PaperTheme;
pub use roles::{MarkerPalette, StageRoles, Theme};

/// Theme plus the catalog entry it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorSupport {
    TrueColor,
    Indexed256,
}

/// Picks the theme to run with.
///
/// Terminals without truecolor always get the ANSI fallback, overrides
/// included. Otherwise the `PODIUM_THEME` environment variable wins, then
/// the caller's preference, then the default; a name that resolves to
/// nothing falls through to the next source.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if color_support() == ColorSupport::Indexed256 {
        debug!("terminal lacks truecolor; using the ANSI fallback palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let definition = env::var("PODIUM_THEME")
        .ok()
        .and_then(|name| catalog::resolve(&name))
        .or_else(|| preferred_theme.and_then(catalog::resolve))
        .unwrap_or_else(catalog::default_truecolor);
    LoadedTheme::from_definition(definition)
}

/// Whether the terminal can show the truecolor palettes, and with them
/// whether the theme cycling binding should be offered.
pub fn supports_theme_cycling() -> bool {
    color_support() == ColorSupport::TrueColor
}

fn color_support() -> ColorSupport {
    if let Ok(mode) = env::var("PODIUM_COLOR_MODE") {
        match mode.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => return ColorSupport::TrueColor,
            "ansi256" | "256" | "8bit" => return ColorSupport::Indexed256,
            _ => {}
        }
    }

    if env::var("PODIUM_FORCE_TRUECOLOR").is_ok_and(|value| is_truthy(value.trim())) {
        return ColorSupport::TrueColor;
    }

    let colorterm = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") || term.contains("truecolor") {
        ColorSupport::TrueColor
    } else {
        ColorSupport::Indexed256
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}
