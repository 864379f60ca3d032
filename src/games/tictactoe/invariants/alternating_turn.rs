//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the marker placed to reach step `n` belongs to the player
/// whose turn it was at step `n - 1`. X always opens.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .all_snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snap)| match snap.origin() {
                Some(pos) => snap.get(pos) == Square::Occupied(Player::to_move_at(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardSnapshot, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let history = GameHistory::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert!(AlternatingTurnInvariant::holds(&history));
        assert_eq!(history.next_marker_to_move(), Player::O);
    }

    #[test]
    fn test_o_opening_violates() {
        let mut history = GameHistory::new();
        history
            .snapshots
            .push(BoardSnapshot::empty().with_move(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
