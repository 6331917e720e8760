//! Shared type definitions for the Podium workspace.
//!
//! The central type is [`Marker`]: a caller-owned value describing one
//! renderable labeled glyph. Markers carry no behavior and no lifecycle;
//! renderers treat them as pure inputs and never mutate them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod scene;

pub use scene::{Scene, SceneError};

/// Horizontal anchor for a marker within its parent surface.
///
/// Markers are always pinned to the bottom edge of the surface; the anchor
/// only selects where along that edge the group sits. There is no default:
/// callers always choose a position explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Fixed inset from the left edge.
    Left,
    /// Horizontally centered.
    Center,
    /// Fixed inset from the right edge.
    Right,
}

impl Anchor {
    /// All anchors in left-to-right order.
    pub const ALL: [Anchor; 3] = [Anchor::Left, Anchor::Center, Anchor::Right];

    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when parsing an [`Anchor`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown anchor '{0}', expected one of: left, center, right")]
pub struct ParseAnchorError(pub String);

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Anchor::Left),
            "center" | "centre" => Ok(Anchor::Center),
            "right" => Ok(Anchor::Right),
            other => Err(ParseAnchorError(other.to_string())),
        }
    }
}

/// One renderable labeled glyph: an emoji above a pill-shaped name badge.
///
/// The value is fully owned by the caller and passed in on every render.
/// Rendering is a pure function of these four fields (plus the animation
/// sample supplied alongside them); none of the fields is validated or
/// mutated by any renderer. An empty `name` is legal and renders as an
/// empty badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Human-readable label shown inside the badge.
    pub name: String,
    /// Single glyph or short grapheme cluster shown above the badge.
    pub glyph: String,
    /// Whether the marker is drawn with the emphasized treatment.
    #[serde(default)]
    pub highlighted: bool,
    /// Horizontal placement along the bottom of the parent surface.
    pub anchor: Anchor,
}

impl Marker {
    /// Creates an unhighlighted marker.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            highlighted: false,
            anchor,
        }
    }

    /// Sets the highlight flag (builder pattern).
    #[must_use]
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

/// Messages that drive the demo application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic animation tick.
    Tick,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Move the highlight to the next marker (wrapping).
    FocusNext,
    /// Move the highlight to the previous marker (wrapping).
    FocusPrev,
    /// Flip the highlight on the focused marker.
    ToggleHighlight,
    /// Advance to the next theme in the catalog.
    CycleTheme,
    /// Show or hide the key hints line.
    ToggleHelp,
    /// Leave the application.
    Quit,
}

/// Side effects reported by update logic for the runtime to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the given theme id to the user's preferences.
    PersistTheme(String),
    /// Terminate the event loop.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_parses_canonical_and_alias_forms() {
        assert_eq!("left".parse::<Anchor>(), Ok(Anchor::Left));
        assert_eq!("CENTER".parse::<Anchor>(), Ok(Anchor::Center));
        assert_eq!("centre".parse::<Anchor>(), Ok(Anchor::Center));
        assert_eq!(" right ".parse::<Anchor>(), Ok(Anchor::Right));
    }

    #[test]
    fn anchor_parse_error_names_the_input() {
        let err = "middle".parse::<Anchor>().unwrap_err();
        assert_eq!(err, ParseAnchorError("middle".to_string()));
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn anchor_display_round_trips() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.to_string().parse::<Anchor>(), Ok(anchor));
        }
    }

    #[test]
    fn marker_builder_defaults_to_unhighlighted() {
        let marker = Marker::new("Cup", "☕", Anchor::Left);
        assert!(!marker.highlighted);
        assert_eq!(marker.clone().highlighted(true).highlighted, true);
        // The builder leaves the other fields untouched.
        assert_eq!(marker.name, "Cup");
        assert_eq!(marker.glyph, "☕");
        assert_eq!(marker.anchor, Anchor::Left);
    }

    #[test]
    fn marker_accepts_empty_name() {
        let marker = Marker::new("", "☕", Anchor::Center);
        assert!(marker.name.is_empty());
    }
}
