//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Enter and restore the terminal (raw mode, alternate screen).
//! - Drive a single event loop that handles input and animation ticks.
//! - Route keys to the root view and execute returned `Effect`s.
//! - Render only when `App` marks itself dirty.
//!
//! Input arrives from a dedicated task that polls `crossterm` and forwards
//! events over a channel. Ticking is adaptive: a fast interval while any
//! marker is animating, a slow one while the scene is at rest, so an idle
//! scene costs close to nothing.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use podium_types::{Effect, Msg, Scene};
use podium_util::UserPreferences;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::warn;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// Tick interval while any marker is animating.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(60);
/// Tick interval while the scene is at rest.
const IDLE_INTERVAL: Duration = Duration::from_millis(1000);

/// Spawn a dedicated task that polls terminal input and forwards `crossterm`
/// events over a Tokio channel.
async fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Err(error) = sender.send(event).await {
                            warn!("failed to forward input event: {error}");
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("failed to read input event: {error}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    warn!("failed to poll for input: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Translate raw crossterm events into component calls.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Entry point for the TUI runtime: loads preferences and the theme, sets up
/// the terminal, runs the event loop, and restores the terminal on exit.
pub async fn run_app(scene: Scene, theme_override: Option<&str>) -> Result<()> {
    let preferences = match UserPreferences::new() {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!("failed to load preferences, continuing without persistence: {error}");
            UserPreferences::ephemeral()
        }
    };
    let saved = preferences.preferred_theme();
    let loaded = theme::load(theme_override.or(saved.as_deref()));

    let mut app = App::new(scene, loaded, preferences);
    let mut main_view = MainView::new();
    let mut input_receiver = spawn_input_task().await;

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut current_interval = ANIMATION_INTERVAL;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        // Tick fast only while something moves on screen.
        let target_interval = if app.is_animating(Instant::now()) {
            ANIMATION_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects = Vec::new();
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = &input_event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects = handle_input_event(app, main_view, input_event);
            }
            _ = ticker.tick() => {
                effects = main_view.handle_message(app, &Msg::Tick);
            }
            _ = signal::ctrl_c() => {
                break;
            }
        }

        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::PersistTheme(theme_id) => {
                    if let Err(error) = app.preferences.set_preferred_theme(Some(theme_id)) {
                        warn!("failed to persist theme preference: {error}");
                    }
                }
                Effect::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
    }

    Ok(())
}
