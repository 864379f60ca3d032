//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// `X` always moves first; `O` replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player expected to move at the given history step.
    ///
    /// Step 0 is the empty board, so X moves there; parity alternates after.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Parses a marker symbol (`X` or `O`, case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_move_alternates_by_step() {
        assert_eq!(Player::to_move_at(0), Player::X);
        assert_eq!(Player::to_move_at(1), Player::O);
        assert_eq!(Player::to_move_at(2), Player::X);
        assert_eq!(Player::to_move_at(7), Player::O);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Player::from_symbol('x'), Some(Player::X));
        assert_eq!(Player::from_symbol('O'), Some(Player::O));
        assert_eq!(Player::from_symbol('.'), None);
    }

    #[test]
    fn test_square_player() {
        assert_eq!(Square::Empty.player(), None);
        assert_eq!(Square::Occupied(Player::O).player(), Some(Player::O));
        assert!(Square::default().is_empty());
    }
}
