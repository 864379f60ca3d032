//! Monotonic board invariant: each step fills exactly one empty square.

use super::super::{GameHistory, Square};
use super::Invariant;

/// Invariant: every snapshot after the first differs from its predecessor
/// in exactly one square, its origin, which goes from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.all_snapshots().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(origin) = next.origin() else {
                return false;
            };

            let changed: Vec<usize> = prev
                .squares()
                .iter()
                .zip(next.squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();

            changed == [origin.to_index()]
                && prev.get(origin) == Square::Empty
                && next.get(origin) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square, at its origin"
    }
}
