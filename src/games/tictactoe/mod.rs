//! Tic-tac-toe with move history and time travel.
//!
//! - [`GameHistory`] records one immutable [`BoardSnapshot`] per move and a
//!   cursor that can be moved to any recorded step.
//! - [`evaluate`] checks a snapshot against the winning lines.
//! - [`view`] derives what a front end needs to draw from a history.

mod action;
mod contracts;
mod error;
mod history;
mod position;
mod snapshot;
mod status;
mod types;

pub mod invariants;
pub mod rules;
pub mod view;

pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use error::{HistoryError, HistoryErrorKind};
pub use history::GameHistory;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{WINNING_LINES, WinResult, check_winner, evaluate, is_draw, is_full};
pub use snapshot::{BoardSnapshot, CELL_COUNT, SnapshotParseError};
pub use status::GameStatus;
pub use types::{Player, Square};
