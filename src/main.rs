//! Strictly Timetravel - terminal host
//!
//! Replays moves through a [`GameHistory`], navigates it, and prints the
//! resulting view.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timetravel::{
    AppConfig, BoardSnapshot, GameHistory, GameView, MoveOrder, MoveOutcome, Position,
    WINNING_LINES, evaluate, is_draw,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            moves,
            jump,
            then,
            descending,
            json,
        } => {
            let order = if descending {
                MoveOrder::Descending
            } else {
                *config.move_order()
            };
            run_play(&moves, jump, &then, order, json)
        }
        Command::Evaluate { board } => run_evaluate(&board),
        Command::Lines => {
            run_lines();
            Ok(())
        }
    }
}

/// Plays one comma-separated cell argument.
///
/// Numbers go through the raw-index entry point; anything else must be a
/// position label.
fn play_cell(history: &mut GameHistory, cell: &str) -> Result<MoveOutcome> {
    let cell = cell.trim();
    if let Ok(index) = cell.parse::<usize>() {
        return history
            .apply_move_at(index)
            .with_context(|| format!("Cannot play cell {}", index));
    }
    let pos = Position::from_label_or_number(cell)
        .ok_or_else(|| anyhow!("Unknown cell: {:?}", cell))?;
    Ok(history.apply_move(pos))
}

/// Applies each cell, reporting ignored moves without failing.
fn play_cells(history: &mut GameHistory, cells: &[String]) -> Result<()> {
    for cell in cells {
        if let MoveOutcome::Ignored(rejection) = play_cell(history, cell)? {
            warn!(cell = %cell, %rejection, "Move ignored");
            eprintln!("Ignored {}: {}", cell, rejection);
        }
    }
    Ok(())
}

/// Replay, jump, continue, and print.
#[instrument(skip_all, fields(moves = moves.len(), jump = ?jump))]
fn run_play(
    moves: &[String],
    jump: Option<usize>,
    then: &[String],
    order: MoveOrder,
    json: bool,
) -> Result<()> {
    let mut history = GameHistory::new();
    play_cells(&mut history, moves)?;

    if let Some(step) = jump {
        history
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    play_cells(&mut history, then)?;

    info!(len = history.len(), cursor = history.cursor(), "Replay finished");
    let view = GameView::from_history(&history, order);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", history.current_snapshot().display());
    println!();
    println!("{}", view.status_line());
    println!();
    for entry in view.moves().entries() {
        let marker = if *entry.selected() { ">" } else { " " };
        println!("{} {}", marker, entry.label());
    }
    println!("[{}]", view.moves().order().toggle_label());
    Ok(())
}

/// Evaluate a literal board.
#[instrument]
fn run_evaluate(board: &str) -> Result<()> {
    let snapshot: BoardSnapshot = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let result = evaluate(&snapshot);

    println!("{}", snapshot.display());
    println!();
    match result.winner() {
        Some(winner) => {
            let cells: Vec<usize> = result.line().iter().map(|p| p.to_index()).collect();
            println!("Winner: {} on {:?}", winner, cells);
        }
        None if is_draw(&snapshot) => println!("DRAW !"),
        None => println!("No winner"),
    }
    Ok(())
}

/// Print the winning lines.
fn run_lines() {
    for (i, line) in WINNING_LINES.iter().enumerate() {
        let cells: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
        println!("{}: {:?}", i, cells);
    }
}
