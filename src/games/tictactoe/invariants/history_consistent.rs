//! History consistency invariant: structure of the snapshot log.

use super::super::{BoardSnapshot, GameHistory, GameStatus};
use super::Invariant;

/// Invariant: the log starts from the empty board, step `n` has `n`
/// occupied squares, nothing follows a finished game, and the cursor
/// points at a recorded snapshot.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.all_snapshots();

        let starts_empty = snapshots.first() == Some(&BoardSnapshot::empty());
        let counts_match = snapshots
            .iter()
            .enumerate()
            .all(|(step, snap)| snap.occupied_count() == step);
        let nothing_after_end = snapshots
            .iter()
            .enumerate()
            .rev()
            .skip(1)
            .all(|(step, snap)| !GameStatus::derive(snap, step).is_terminal());
        let cursor_in_bounds = history.cursor() < snapshots.len();

        starts_empty && counts_match && nothing_after_end && cursor_in_bounds
    }

    fn description() -> &'static str {
        "History starts empty, grows one square per step, stops at game end, cursor in bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let history = GameHistory::replay([
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert_eq!(history.len(), 10);
        assert!(HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_cursor_out_of_bounds_violates() {
        let mut history = GameHistory::replay([Position::Center]);
        history.cursor = 2;
        assert!(!HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = BoardSnapshot::empty().with_move(Position::Center, Player::X);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut history = GameHistory::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        let extra = history.snapshots[5].with_move(Position::BottomRight, Player::O);
        history.snapshots.push(extra);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
