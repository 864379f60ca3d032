//! Win detection logic for tic-tac-toe.

use super::super::{BoardSnapshot, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a snapshot for a completed line.
///
/// `winner` and `line` are set together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Vec<Position>,
}

impl WinResult {
    /// No completed line.
    pub fn none() -> Self {
        Self::default()
    }

    fn won(player: Player, line: [Position; 3]) -> Self {
        Self {
            winner: Some(player),
            line: line.to_vec(),
        }
    }

    /// Returns the winning player, if a line is complete.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the winning line's cells, or an empty slice.
    pub fn line(&self) -> &[Position] {
        &self.line
    }

    /// Checks if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a snapshot against the fixed winning lines.
///
/// The first complete line in [`WINNING_LINES`] order wins. Draws are not
/// reported here; see [`super::is_draw`].
#[instrument(skip(snapshot), fields(origin = ?snapshot.origin()))]
pub fn evaluate(snapshot: &BoardSnapshot) -> WinResult {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = snapshot.get(a);
        if let Square::Occupied(player) = sq
            && sq == snapshot.get(b)
            && sq == snapshot.get(c)
        {
            return WinResult::won(player, line);
        }
    }

    WinResult::none()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(snapshot: &BoardSnapshot) -> Option<Player> {
    evaluate(snapshot).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> BoardSnapshot {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let result = evaluate(&BoardSnapshot::empty());
        assert_eq!(result, WinResult::none());
        assert!(result.line().is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        let result = evaluate(&board("XXX/OO./..."));
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(
            result.line(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let result = evaluate(&board("O.X/.OX/..O"));
        assert_eq!(result.winner(), Some(Player::O));
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopRight));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let result = evaluate(&board("OOX/.X./X.."));
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(
            result.line(),
            &[Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./.../...")), None);
    }

    #[test]
    fn test_first_line_in_order_wins_on_synthetic_board() {
        // Both the top row and the left column are complete.
        let result = evaluate(&board("XXX/X../X.."));
        assert_eq!(
            result.line(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XOX/.../...")), None);
    }
}
