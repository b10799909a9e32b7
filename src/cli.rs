//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML configuration file (defaults apply if missing)
        #[arg(short, long, default_value = "tictactoe_history.toml")]
        config: std::path::PathBuf,

        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of cell clicks and print the resulting view
    Replay {
        /// Cell indices (0-8) clicked in order
        cells: Vec<usize>,

        /// History step to jump to after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
