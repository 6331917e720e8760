//! Root view: the stage plus a one-line hint row underneath.
//!
//! Global key bindings (quit, help, theme cycling) live here; everything
//! marker-related is delegated to [`StageComponent`].

use crossterm::event::{KeyCode, KeyEvent};
use podium_types::{Effect, Msg};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::stage::StageComponent;
use crate::ui::theme::theme_helpers;

#[derive(Default)]
pub struct MainView {
    stage: StageComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            stage: StageComponent::new(),
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return app.update(&Msg::Quit),
            KeyCode::Char('?') => return app.update(&Msg::ToggleHelp),
            KeyCode::Char('t') if app.theme_cycling_available => {
                return app.update(&Msg::CycleTheme);
            }
            _ => {}
        }
        self.stage.handle_key_events(app, key)
    }

    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        effects.extend(self.stage.handle_message(app, msg));
        effects
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("Hints: ", app.theme.text_muted_style())];
        spans.extend(self.stage.get_hint_spans(app));

        let mut globals = vec![("?", "help"), ("q", "quit")];
        if app.theme_cycling_available {
            globals.insert(0, ("t", "theme"));
        }
        spans.push(Span::raw("  "));
        spans.extend(theme_helpers::build_hint_spans(app.theme.as_ref(), &globals));
        spans
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the whole area so resizes never leave stale cells behind.
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
        self.stage.render(frame, rows[0], app);

        if app.show_help {
            let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.theme.text_muted_style());
            frame.render_widget(hints, rows[1]);
        }
    }
}
