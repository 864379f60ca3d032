//! History error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// `jump_to` was given a step outside the recorded history.
    #[display("Step {step} out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },

    /// A raw cell index outside 0-8.
    #[display("Cell {_0} out of range (must be 0-8)")]
    CellOutOfRange(usize),

    /// A deserialized history holds no snapshots.
    #[display("History record has no snapshots")]
    EmptyLog,

    /// A deserialized history breaks one or more history invariants.
    #[display("History record breaks {violations} invariant(s)")]
    InvalidRecord {
        /// Number of violated invariants.
        violations: usize,
    },
}

/// History error with location tracking.
///
/// These are caller contract violations, not user mistakes; illegal moves
/// are ignored rather than reported through this type.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// Error kind.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> HistoryErrorKind {
        self.kind
    }
}

impl From<HistoryErrorKind> for HistoryError {
    #[track_caller]
    fn from(kind: HistoryErrorKind) -> Self {
        Self::new(kind)
    }
}
