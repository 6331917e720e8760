//! Podium: animated labeled markers on a terminal stage.
//!
//! With no subcommand the binary starts the interactive TUI. The `themes`
//! and `preview` subcommands run headless and print to stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use podium_types::{Anchor, Marker, Scene};

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author, version, about = "Animated labeled markers on a terminal stage", long_about = None)]
struct Cli {
    /// Theme to use (see `podium themes`)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Scene file to show: a JSON array of markers
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available themes
    Themes,
    /// Render one marker to stdout without entering the TUI
    Preview {
        /// Label shown inside the badge
        name: String,
        /// Glyph shown above the badge
        glyph: String,
        /// Position along the bottom edge: left, center, or right
        anchor: Anchor,
        /// Render the marker with the highlight treatment
        #[arg(long)]
        highlighted: bool,
        /// Snapshot width in cells
        #[arg(long, default_value_t = 48)]
        width: u16,
        /// Snapshot height in cells
        #[arg(long, default_value_t = 12)]
        height: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Themes) => {
            print_themes();
            Ok(())
        }
        Some(Commands::Preview {
            name,
            glyph,
            anchor,
            highlighted,
            width,
            height,
        }) => {
            let marker = Marker::new(name, glyph, anchor).highlighted(highlighted);
            let snapshot = podium_tui::render_preview(&marker, cli.theme.as_deref(), width, height);
            println!("{snapshot}");
            Ok(())
        }
        None => {
            let scene = load_scene(cli.scene.as_deref())?;
            podium_tui::run(scene, cli.theme.as_deref()).await
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_scene(path: Option<&Path>) -> Result<Scene> {
    match path {
        Some(path) => Scene::load(path).with_context(|| format!("failed to load scene from {}", path.display())),
        None => Ok(default_scene()),
    }
}

/// The scene shown when no file is given.
fn default_scene() -> Scene {
    Scene::new(vec![
        Marker::new("Cup", "☕", Anchor::Left),
        Marker::new("Crab", "🦀", Anchor::Center).highlighted(true),
        Marker::new("Star", "⭐", Anchor::Right),
    ])
}

fn print_themes() {
    for definition in podium_tui::theme::catalog::all() {
        let fallback = if definition.is_ansi_fallback { " [ansi fallback]" } else { "" };
        println!("{:<10} {:<10} {}{}", definition.id, definition.label, definition.description, fallback);
    }
}
