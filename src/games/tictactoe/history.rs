//! Move history with time travel.
//!
//! [`GameHistory`] owns an ordered log of immutable snapshots plus a cursor.
//! Moving the cursor never discards anything; the recorded future is only
//! dropped when a new move is made from an earlier step.

use super::action::{Move, MoveOutcome, Rejection};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::error::{HistoryError, HistoryErrorKind};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::status::GameStatus;
use super::{BoardSnapshot, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Linear history of board snapshots and the step currently shown.
///
/// Invariants:
/// - `snapshots` is never empty and `snapshots[0]` is the empty board
/// - `cursor < snapshots.len()`
/// - each snapshot after the first differs from its predecessor in one cell
///
/// Deserialization rejects records that break any of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameHistoryRecord")]
pub struct GameHistory {
    pub(super) snapshots: Vec<BoardSnapshot>,
    pub(super) cursor: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct GameHistoryRecord {
    snapshots: Vec<BoardSnapshot>,
    cursor: usize,
}

impl TryFrom<GameHistoryRecord> for GameHistory {
    type Error = HistoryError;

    #[instrument(skip(record), fields(len = record.snapshots.len(), cursor = record.cursor))]
    fn try_from(record: GameHistoryRecord) -> Result<Self, Self::Error> {
        let len = record.snapshots.len();
        if len == 0 {
            warn!("History record has no snapshots");
            return Err(HistoryError::new(HistoryErrorKind::EmptyLog));
        }
        if record.cursor >= len {
            warn!("History record cursor out of range");
            return Err(HistoryError::new(HistoryErrorKind::StepOutOfRange {
                step: record.cursor,
                len,
            }));
        }

        let history = Self {
            snapshots: record.snapshots,
            cursor: record.cursor,
        };
        TicTacToeInvariants::check_all(&history).map_err(|violations| {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            HistoryError::new(HistoryErrorKind::InvalidRecord {
                violations: violations.len(),
            })
        })?;

        debug!("History record accepted");
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![BoardSnapshot::empty()],
            cursor: 0,
        }
    }

    /// Replays positions from the empty board.
    ///
    /// Illegal positions are ignored exactly as [`GameHistory::apply_move`]
    /// ignores them.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut history = Self::new();
        for pos in positions {
            history.apply_move(pos);
        }
        history
    }

    /// Places the next marker at `pos`.
    ///
    /// Preconditions are checked in order: the snapshot at the cursor must
    /// not be terminal, then `pos` must be empty. A failed precondition
    /// leaves the history untouched and is reported as
    /// [`MoveOutcome::Ignored`].
    ///
    /// On success every snapshot after the cursor is discarded, the new
    /// snapshot is appended and the cursor advances onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let action = Move::new(self.next_marker_to_move(), pos);

        if let Err(rejection) = MoveContract::pre(self, &action) {
            debug!(%rejection, "Move ignored");
            return MoveOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_snapshot().with_move(pos, action.player);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor += 1;

        info!(%action, step = self.cursor, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "History invariants violated");
        }

        MoveOutcome::Applied { step: self.cursor }
    }

    /// Raw-index form of [`GameHistory::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfRange` if `cell` is not in 0-8. Illegal moves are
    /// still ignored, not errors.
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, cell: usize) -> Result<MoveOutcome, HistoryError> {
        let pos = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Cell index out of range");
            HistoryError::new(HistoryErrorKind::CellOutOfRange(cell))
        })?;
        Ok(self.apply_move(pos))
    }

    /// Moves the cursor to `step` without altering recorded snapshots.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step >= len()`. The cursor is never
    /// clamped.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.snapshots.len();
        if step >= len {
            warn!(step, len, "Jump target out of range");
            return Err(HistoryError::new(HistoryErrorKind::StepOutOfRange {
                step,
                len,
            }));
        }
        debug!(from = self.cursor, to = step, "Cursor moved");
        self.cursor = step;
        Ok(())
    }

    /// Returns the snapshot at the cursor.
    pub fn current_snapshot(&self) -> &BoardSnapshot {
        &self.snapshots[self.cursor]
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn all_snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }

    /// Returns the snapshot at `step`, if recorded.
    pub fn snapshot(&self, step: usize) -> Option<&BoardSnapshot> {
        self.snapshots.get(step)
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (moves + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Checks if the cursor sits on the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Player who moves next from the cursor, by parity.
    ///
    /// Meaningless once the game at the cursor is over; check
    /// [`GameHistory::status`] first.
    pub fn next_marker_to_move(&self) -> Player {
        Player::to_move_at(self.cursor)
    }

    /// Status of the snapshot at the cursor.
    pub fn status(&self) -> GameStatus {
        GameStatus::derive(self.current_snapshot(), self.cursor)
    }

    /// Recorded moves, oldest first, including any future beyond the cursor.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(step, snap)| {
                snap.origin()
                    .map(|pos| Move::new(Player::to_move_at(step - 1), pos))
            })
            .collect()
    }

    /// Returns true if `pos` would be accepted as the next move.
    pub fn is_legal(&self, pos: Position) -> bool {
        LegalMove::check(&Move::new(self.next_marker_to_move(), pos), self).is_ok()
    }

    /// Positions that would be accepted as the next move.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            return Vec::new();
        }
        self.current_snapshot().empty_positions()
    }

    /// Reason `pos` would be ignored, if any.
    pub fn rejection_for(&self, pos: Position) -> Option<Rejection> {
        LegalMove::check(&Move::new(self.next_marker_to_move(), pos), self).err()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
