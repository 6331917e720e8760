//! Shared utilities for the Podium CLI/TUI.

mod paths;
mod preferences;
mod width;

pub use paths::expand_tilde;
pub use preferences::{PreferencesError, PreferencesPayload, UserPreferences};
pub use width::display_width;
