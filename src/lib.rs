//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! The crate is a pure state container: no rendering, no I/O in the game
//! logic. A front end feeds it clicks and draws what it reads back.
//!
//! # Architecture
//!
//! - **History**: [`GameHistory`] records one immutable [`BoardSnapshot`]
//!   per move and a cursor that can revisit any recorded step
//! - **Rules**: [`evaluate`] reports the winner and winning line of a
//!   snapshot; [`is_draw`] is derived from it
//! - **View**: [`GameView`] turns a history into status text, highlighted
//!   cells and a navigable move list
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, GameStatus, Position, TicTacToePlayer as Player};
//!
//! let mut history = GameHistory::new();
//! history.apply_move(Position::Center);
//! history.apply_move(Position::TopLeft);
//! assert_eq!(history.len(), 3);
//!
//! history.jump_to(1).unwrap();
//! assert_eq!(history.status(), GameStatus::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BoardSnapshot, GameHistory, GameStatus, HistoryError, HistoryErrorKind, Move, MoveOutcome,
    Position, Rejection, SnapshotParseError, Square, WINNING_LINES, WinResult, evaluate, is_draw,
    is_full, Player as TicTacToePlayer,
};

// Crate-level exports - Presentation read model
pub use games::tictactoe::view::{GameView, MoveListEntry, MoveListView, MoveOrder, SquareView};
