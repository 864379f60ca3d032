//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, Rejection};
use super::history::GameHistory;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the snapshot at the cursor is not terminal.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`Rejection::GameOver`] on a won or drawn snapshot.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), Rejection> {
        if history.status().is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`Rejection::SquareOccupied`] on an occupied square.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), Rejection> {
        if history.current_snapshot().is_empty(mov.position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition, checked in order: game not over, then square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), Rejection> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(mov, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game at the cursor is not over
/// - Square must be empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are kept verbatim
/// - Exactly one snapshot follows them and the cursor points at it
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(history: &GameHistory, action: &Move) -> Result<(), Rejection> {
        LegalMove::check(action, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let kept = before.cursor() + 1;
        if after.len() != kept + 1 || after.cursor() != kept {
            violations.push(InvariantViolation::new(
                "Move appends exactly one snapshot after the cursor",
            ));
        }
        if after.all_snapshots().get(..kept) != before.all_snapshots().get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the cursor are preserved",
            ));
        }

        if let Err(mut found) = TicTacToeInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardSnapshot, Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let history = GameHistory::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&history, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let history = GameHistory::replay([Position::Center]);
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&history, &action),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_comes_first() {
        let history = GameHistory::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(MoveContract::pre(&history, &action), Err(Rejection::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameHistory::replay([Position::Center]);
        let mut after = before.clone();
        after.apply_move(Position::TopLeft);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lost_prefix() {
        let before = GameHistory::replay([Position::Center]);
        let mut after = before.clone();
        after.apply_move(Position::TopLeft);

        after.snapshots[1] = BoardSnapshot::empty().with_move(Position::BottomRight, Player::X);

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_postcondition_detects_unmoved_cursor() {
        let before = GameHistory::replay([Position::Center]);
        let mut after = before.clone();
        after.apply_move(Position::TopLeft);
        after.cursor = 1;

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
