//! Component abstractions for the demo UI.
//!
//! Components are self-contained UI elements that handle their own input,
//! react to application messages, and render into a caller-provided area.
//! They never mutate global state directly: state changes go through
//! [`App::update`](crate::app::App::update) and anything the runtime must do
//! is reported back as [`Effect`]s.

use anyhow::Result;
use crossterm::event::KeyEvent;
use podium_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI element with its own input handling and rendering.
///
/// All methods except `render` have no-op defaults so components only
/// implement the hooks they care about.
pub(crate) trait Component {
    /// One-time setup hook, called before the first render.
    #[allow(dead_code)]
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event while this component is active.
    ///
    /// Returns the effects the key produced; an empty vector means the key
    /// was not consumed.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// React to an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Key hints to show in the hint row while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }

    /// Draw the component into `rect`.
    ///
    /// Rendering must not change application state; state changes belong in
    /// the message and key handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
