//! Stage component: the bordered surface the markers stand on.
//!
//! Owns the marker-facing key bindings (focus movement and highlight
//! toggling) and samples every marker's animation clock at one instant per
//! frame before handing the scene to [`StageWidget`].

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use podium_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::animation::Motion;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers;
use crate::ui::widgets::StageWidget;

#[derive(Default)]
pub struct StageComponent;

impl StageComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let msg = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Msg::FocusPrev,
            KeyCode::Right | KeyCode::Char('l') => Msg::FocusNext,
            KeyCode::Char(' ') => Msg::ToggleHighlight,
            _ => return Vec::new(),
        };
        app.update(&msg)
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        theme_helpers::build_hint_spans(app.theme.as_ref(), &[("←/→", "focus"), ("Space", "highlight")])
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        // One sample instant for the whole frame keeps the markers in step.
        let now = Instant::now();
        let motions: Vec<Motion> = app.motions.iter().map(|motion| motion.sample(now)).collect();
        let widget = StageWidget::new(&app.markers, &motions, app.theme.as_ref(), "Stage");
        frame.render_widget(widget, rect);
    }
}
