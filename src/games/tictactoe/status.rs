//! Session-level game status, derived from a snapshot.
//!
//! Status is never stored. It is recomputed from whichever snapshot the
//! cursor points at, so navigating back into history yields the status the
//! game had at that step.

use super::rules::{evaluate, is_full};
use super::{BoardSnapshot, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("DRAW !")]
    Draw,
}

impl GameStatus {
    /// Derives the status of `snapshot` when it sits at history `step`.
    ///
    /// A winner takes precedence over a full board.
    #[instrument(skip(snapshot))]
    pub fn derive(snapshot: &BoardSnapshot, step: usize) -> Self {
        if let Some(winner) = evaluate(snapshot).winner() {
            GameStatus::Won(winner)
        } else if is_full(snapshot) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Player::to_move_at(step),
            }
        }
    }

    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status() {
        let status = GameStatus::derive(&BoardSnapshot::empty(), 0);
        assert_eq!(status, GameStatus::InProgress { next: Player::X });
        assert!(!status.is_terminal());
        assert_eq!(status.to_string(), "Next player: X");
    }

    #[test]
    fn test_won_status() {
        let snap: BoardSnapshot = "OOO/XX./X..".parse().unwrap();
        let status = GameStatus::derive(&snap, 6);
        assert_eq!(status, GameStatus::Won(Player::O));
        assert!(status.is_terminal());
        assert_eq!(status.winner(), Some(Player::O));
        assert_eq!(status.to_string(), "Winner: O");
    }

    #[test]
    fn test_draw_status() {
        let snap: BoardSnapshot = "XOX/XOO/OXX".parse().unwrap();
        let status = GameStatus::derive(&snap, 9);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.to_string(), "DRAW !");
    }

    #[test]
    fn test_full_board_with_line_is_won_not_draw() {
        let snap: BoardSnapshot = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(GameStatus::derive(&snap, 9), GameStatus::Won(Player::X));
    }
}
