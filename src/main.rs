//! tictactoe_history - terminal front end
//!
//! Renders a game session and forwards user gestures into it.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{GameSession, GameView, Gesture, TuiConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay {
            cells,
            jump,
            descending,
            json,
        } => run_replay(cells, jump, descending, json),
    }
}

/// Run the interactive terminal game
fn run_play(config_path: std::path::PathBuf, descending: bool) -> Result<()> {
    let mut config = TuiConfig::load_or_default(&config_path)?;
    if descending {
        config = config.with_ascending(false);
    }
    tui::run_tui(config)
}

/// Replay cell clicks and print the resulting view
#[instrument(skip(cells), fields(clicks = cells.len()))]
fn run_replay(cells: Vec<usize>, jump: Option<usize>, descending: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_history=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying cell clicks");

    let mut session = GameSession::with_order(!descending);
    let gestures = cells
        .into_iter()
        .map(Gesture::CellClicked)
        .chain(jump.map(Gesture::HistoryStepClicked));

    for gesture in gestures {
        if let Err(e) = session.dispatch(gesture) {
            warn!(%gesture, error = %e, "Gesture rejected");
            eprintln!("Rejected {}: {}", gesture, e);
        }
    }

    let view = session.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

/// Plain-text rendering of a view.
fn render_text(view: &GameView) -> String {
    let mut out = format!("{}\n\n{}\n", view.board().display(), view.status());

    if !view.highlighted().is_empty() {
        let cells: Vec<String> = view
            .highlighted()
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }

    out.push('\n');
    for entry in view.moves() {
        let marker = if *entry.is_current() { '*' } else { ' ' };
        match entry.coordinates() {
            Some(coords) => out.push_str(&format!("{} {} {}\n", marker, coords, entry.label())),
            None => out.push_str(&format!("{} {}\n", marker, entry.label())),
        }
    }
    out
}
