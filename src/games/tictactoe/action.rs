//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move request either
//! produces a new snapshot or is ignored with a reason; ignoring a move is
//! an expected outcome of play and never an error.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The snapshot at the cursor already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded; the cursor now points at `step`.
    Applied {
        /// Index of the new snapshot.
        step: usize,
    },
    /// The move was ignored and the history is unchanged.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}
