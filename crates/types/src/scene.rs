//! Scene files: ordered marker lists loaded from JSON.
//!
//! A scene file is a plain JSON array of markers, e.g.
//!
//! ```json
//! [
//!   { "name": "Cup",  "glyph": "☕", "anchor": "left" },
//!   { "name": "Crab", "glyph": "🦀", "anchor": "center", "highlighted": true }
//! ]
//! ```
//!
//! Markers render in file order; a later marker paints over an earlier one
//! if their footprints overlap.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Marker;

/// Error surfaced when reading or parsing a scene file fails.
#[derive(Debug, Error)]
pub enum SceneError {
    /// I/O failure (missing file, permissions).
    #[error("scene I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file content is not a valid marker array.
    #[error("scene parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered list of markers rendered on one stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    /// Markers in render order.
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Builds a scene from markers already in hand.
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Parses a scene from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Returns true when the scene holds no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of markers in the scene.
    pub fn len(&self) -> usize {
        self.markers.len()
    }
}
