//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};

/// Strictly Timetravel - tic-tac-toe with full move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Play, rewind and inspect tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves, optionally jump back, and show the result
    Play {
        /// Cells to play, comma-separated (0-8 or labels like "center")
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Cells to play after the jump, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        then: Vec<String>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board given as 9 cells, e.g. "XXX/OO./..."
    Evaluate {
        /// Board cells in row-major order (X, O, and . for empty)
        board: String,
    },

    /// Print the winning lines in evaluation order
    Lines,
}
