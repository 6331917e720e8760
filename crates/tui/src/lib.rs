//! Terminal UI for the Podium marker demo.
//!
//! Renders labeled emoji markers on a bordered stage with an animated
//! highlight treatment, and drives the interactive demo loop. The crate
//! follows a component architecture: the stage is a component, the root
//! view composes it with a hint row, and a message/effect update cycle
//! keeps state changes out of rendering.

mod animation;
mod app;
mod ui;

use anyhow::Result;
use podium_types::Scene;

pub use ui::preview::render_preview;
pub use ui::theme;

/// Runs the interactive demo until the user quits.
///
/// `theme_override` takes precedence over the persisted preference; both
/// lose to terminals without 24-bit color, which always get the fallback
/// theme.
pub async fn run(scene: Scene, theme_override: Option<&str>) -> Result<()> {
    ui::runtime::run_app(scene, theme_override).await
}
