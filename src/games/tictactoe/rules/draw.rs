//! Draw detection logic for tic-tac-toe.

use super::super::BoardSnapshot;
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(snapshot: &BoardSnapshot) -> bool {
    snapshot.squares().iter().all(|s| !s.is_empty())
}

/// A draw is a full board with no completed line.
pub fn is_draw(snapshot: &BoardSnapshot) -> bool {
    is_full(snapshot) && check_winner(snapshot).is_none()
}
