//! Application state and update logic for the interactive demo.
//!
//! The app owns the scene's markers plus one animation clock per marker and
//! follows the message/effect update style: input handling produces [`Msg`]
//! values, [`App::update`] mutates state and returns [`Effect`]s for the
//! runtime to carry out.

use std::time::Instant;

use podium_types::{Effect, Marker, Msg, Scene};
use podium_util::UserPreferences;

use crate::animation::MarkerMotion;
use crate::ui::theme::{self, LoadedTheme, Theme};

pub struct App {
    /// Markers in scene order.
    pub markers: Vec<Marker>,
    /// One animation clock per marker, index-aligned with `markers`.
    pub motions: Vec<MarkerMotion>,
    /// Live theme instance.
    pub theme: Box<dyn Theme>,
    /// Catalog id of the live theme.
    pub active_theme_id: String,
    /// Persisted user preferences.
    pub preferences: UserPreferences,
    /// Index of the marker the demo controls act on.
    pub focused: usize,
    /// Whether the hint row is visible.
    pub show_help: bool,
    /// Whether the active terminal can show the non-fallback themes.
    pub theme_cycling_available: bool,
    /// Cleared when the application should exit.
    pub running: bool,
    dirty: bool,
}

impl App {
    pub fn new(scene: Scene, loaded: LoadedTheme, preferences: UserPreferences) -> Self {
        let now = Instant::now();
        let markers = scene.markers;
        let mut motions: Vec<MarkerMotion> = markers.iter().map(|_| MarkerMotion::new()).collect();
        // Markers that start highlighted animate in on the first frames.
        for (marker, motion) in markers.iter().zip(&mut motions) {
            if marker.highlighted {
                motion.set_highlighted(true, now);
            }
        }
        let focused = markers.iter().position(|marker| marker.highlighted).unwrap_or(0);
        Self {
            markers,
            motions,
            theme: loaded.theme,
            active_theme_id: loaded.definition.id.to_string(),
            preferences,
            focused,
            show_help: true,
            theme_cycling_available: theme::supports_theme_cycling(),
            running: true,
            dirty: true,
        }
    }

    /// Processes one message and returns the side effects it produced.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Tick => {
                if self.is_animating(Instant::now()) {
                    self.dirty = true;
                }
            }
            Msg::Resize(_, _) => {
                self.dirty = true;
            }
            Msg::FocusNext => self.focus_step(1),
            Msg::FocusPrev => self.focus_step(-1),
            Msg::ToggleHighlight => {
                if let Some(marker) = self.markers.get_mut(self.focused) {
                    marker.highlighted = !marker.highlighted;
                    let highlighted = marker.highlighted;
                    self.motions[self.focused].set_highlighted(highlighted, Instant::now());
                    self.dirty = true;
                }
            }
            Msg::CycleTheme => {
                let cycle: Vec<_> = theme::catalog::all()
                    .iter()
                    .filter(|definition| !definition.is_ansi_fallback)
                    .collect();
                if !cycle.is_empty() {
                    let current = cycle
                        .iter()
                        .position(|definition| definition.id == self.active_theme_id)
                        .unwrap_or(0);
                    let next = cycle[(current + 1) % cycle.len()];
                    self.theme = next.build();
                    self.active_theme_id = next.id.to_string();
                    self.dirty = true;
                    effects.push(Effect::PersistTheme(next.id.to_string()));
                }
            }
            Msg::ToggleHelp => {
                self.show_help = !self.show_help;
                self.dirty = true;
            }
            Msg::Quit => {
                self.running = false;
                effects.push(Effect::Quit);
            }
        }
        effects
    }

    /// Moves the highlight to the next or previous marker, wrapping around.
    ///
    /// A scene file may start with several markers highlighted; the first
    /// focus move normalizes to exactly one.
    fn focus_step(&mut self, delta: isize) {
        if self.markers.is_empty() {
            return;
        }
        let len = self.markers.len() as isize;
        let next = (self.focused as isize + delta).rem_euclid(len) as usize;
        self.focused = next;

        let now = Instant::now();
        for (index, (marker, motion)) in self.markers.iter_mut().zip(&mut self.motions).enumerate() {
            let highlighted = index == next;
            if marker.highlighted != highlighted {
                marker.highlighted = highlighted;
                motion.set_highlighted(highlighted, now);
            }
        }
        self.dirty = true;
    }

    /// True while any marker's clock would show something new next tick.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.motions.iter().any(|motion| motion.is_animating(now))
    }

    /// Consumes the dirty flag, reporting whether a redraw is due.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use podium_types::{Anchor, Marker};

    use super::*;
    use crate::ui::theme::catalog;

    fn scene(markers: Vec<Marker>) -> Scene {
        Scene::new(markers)
    }

    fn test_app(markers: Vec<Marker>) -> App {
        let definition = catalog::default_truecolor();
        let loaded = LoadedTheme {
            definition,
            theme: definition.build(),
        };
        App::new(scene(markers), loaded, UserPreferences::ephemeral())
    }

    fn three_markers() -> Vec<Marker> {
        vec![
            Marker::new("Cup", "☕", Anchor::Left),
            Marker::new("Crab", "🦀", Anchor::Center),
            Marker::new("Star", "⭐", Anchor::Right),
        ]
    }

    fn highlighted_flags(app: &App) -> Vec<bool> {
        app.markers.iter().map(|marker| marker.highlighted).collect()
    }

    #[test]
    fn focus_starts_on_the_first_highlighted_marker() {
        let mut markers = three_markers();
        markers[1] = markers[1].clone().highlighted(true);
        let app = test_app(markers);
        assert_eq!(app.focused, 1);
        assert!(app.is_animating(Instant::now()));
    }

    #[test]
    fn focus_next_wraps_and_normalizes_to_one_highlight() {
        let mut markers = three_markers();
        markers[1] = markers[1].clone().highlighted(true);
        markers[2] = markers[2].clone().highlighted(true);
        let mut app = test_app(markers);

        app.update(&Msg::FocusNext);
        assert_eq!(app.focused, 2);
        assert_eq!(highlighted_flags(&app), vec![false, false, true]);

        app.update(&Msg::FocusNext);
        assert_eq!(app.focused, 0);
        assert_eq!(highlighted_flags(&app), vec![true, false, false]);
    }

    #[test]
    fn focus_prev_wraps_backwards() {
        let mut app = test_app(three_markers());
        assert_eq!(app.focused, 0);
        app.update(&Msg::FocusPrev);
        assert_eq!(app.focused, 2);
        assert_eq!(highlighted_flags(&app), vec![false, false, true]);
    }

    #[test]
    fn toggle_highlight_flips_the_focused_marker_and_its_clock() {
        let mut app = test_app(three_markers());
        app.update(&Msg::ToggleHighlight);
        assert!(app.markers[0].highlighted);
        assert!(app.motions[0].is_highlighted());

        app.update(&Msg::ToggleHighlight);
        assert!(!app.markers[0].highlighted);
        assert!(!app.motions[0].is_highlighted());
    }

    #[test]
    fn cycle_theme_advances_and_asks_for_persistence() {
        let mut app = test_app(three_markers());
        assert_eq!(app.active_theme_id, "midnight");

        let effects = app.update(&Msg::CycleTheme);
        assert_eq!(app.active_theme_id, "paper");
        assert_eq!(effects, vec![Effect::PersistTheme("paper".into())]);

        let effects = app.update(&Msg::CycleTheme);
        assert_eq!(app.active_theme_id, "midnight");
        assert_eq!(effects, vec![Effect::PersistTheme("midnight".into())]);
    }

    #[test]
    fn quit_stops_the_app() {
        let mut app = test_app(three_markers());
        let effects = app.update(&Msg::Quit);
        assert!(!app.running);
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn tick_marks_dirty_only_while_animating() {
        let mut app = test_app(three_markers());
        assert!(app.take_dirty());

        app.update(&Msg::Tick);
        assert!(!app.take_dirty());

        app.update(&Msg::ToggleHighlight);
        let _ = app.take_dirty();
        app.update(&Msg::Tick);
        assert!(app.take_dirty());
    }

    #[test]
    fn focus_moves_on_an_empty_scene_are_a_no_op() {
        let mut app = test_app(Vec::new());
        let _ = app.take_dirty();
        let effects = app.update(&Msg::FocusNext);
        assert!(effects.is_empty());
        assert!(!app.take_dirty());
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn help_toggle_and_resize_mark_the_app_dirty() {
        let mut app = test_app(three_markers());
        let _ = app.take_dirty();

        app.update(&Msg::ToggleHelp);
        assert!(!app.show_help);
        assert!(app.take_dirty());

        app.update(&Msg::Resize(80, 24));
        assert!(app.take_dirty());
    }
}
