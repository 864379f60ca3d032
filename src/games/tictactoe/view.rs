//! Read model for front ends.
//!
//! Nothing here holds game rules. A front end builds a [`GameView`] from a
//! [`GameHistory`] after every action and draws it: the board with its
//! winning cells highlighted, a status line, and a move list whose entries
//! jump the cursor when selected.

use super::rules::evaluate;
use super::{GameHistory, GameStatus, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Label for the button that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "v^",
            MoveOrder::Descending => "^v",
        }
    }
}

/// Label for the move list entry at `step`.
///
/// Step 0 is the game start; later steps name the 1-based `(col,row)` that
/// was played.
pub fn move_label(step: usize, origin: Option<Position>) -> String {
    match origin {
        Some(pos) if step > 0 => {
            let (col, row) = pos.coordinates();
            format!("Go to move #{} ({},{})", step, col, row)
        }
        _ => "Go to game start".to_string(),
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Cell played to reach the step.
    origin: Option<Position>,
    /// Button text.
    label: String,
    /// True for the step under the cursor.
    selected: bool,
}

/// The full move list in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveListView {
    /// Entries in ascending step order.
    #[getter(skip)]
    entries: Vec<MoveListEntry>,
    /// Presentation order.
    order: MoveOrder,
}

impl MoveListView {
    /// Builds the move list for every recorded snapshot.
    #[instrument(skip(history), fields(len = history.len(), cursor = history.cursor()))]
    pub fn from_history(history: &GameHistory, order: MoveOrder) -> Self {
        let entries = history
            .all_snapshots()
            .iter()
            .enumerate()
            .map(|(step, snap)| {
                MoveListEntry::new(
                    step,
                    snap.origin(),
                    move_label(step, snap.origin()),
                    step == history.cursor(),
                )
            })
            .collect();
        Self { entries, order }
    }

    /// Entries in presentation order.
    pub fn entries(&self) -> Vec<&MoveListEntry> {
        match self.order {
            MoveOrder::Ascending => self.entries.iter().collect(),
            MoveOrder::Descending => self.entries.iter().rev().collect(),
        }
    }

    /// Flips the presentation order. Step numbers are unaffected.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a list built from a history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One board cell as a front end draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct SquareView {
    /// Cell position.
    position: Position,
    /// Cell contents.
    square: Square,
    /// True if the cell is part of the winning line.
    is_winner_square: bool,
}

/// Everything a front end needs to draw the game at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Cells in row-major order.
    squares: Vec<SquareView>,
    /// Status at the cursor.
    status: GameStatus,
    /// Status rendered for display.
    status_line: String,
    /// Move list.
    moves: MoveListView,
    /// Cursor position.
    cursor: usize,
}

impl GameView {
    /// Derives the view of `history` at its cursor.
    #[instrument(skip(history), fields(cursor = history.cursor()))]
    pub fn from_history(history: &GameHistory, order: MoveOrder) -> Self {
        let snapshot = history.current_snapshot();
        let win = evaluate(snapshot);
        let squares = Position::ALL
            .iter()
            .map(|&position| SquareView {
                position,
                square: snapshot.get(position),
                is_winner_square: win.contains(position),
            })
            .collect();
        let status = history.status();

        Self {
            squares,
            status,
            status_line: status.to_string(),
            moves: MoveListView::from_history(history, order),
            cursor: history.cursor(),
        }
    }

    /// Cells of the winning line, if any.
    pub fn highlighted(&self) -> Vec<Position> {
        self.squares
            .iter()
            .filter(|s| s.is_winner_square)
            .map(|s| s.position)
            .collect()
    }

    /// Flips the move list order in place.
    pub fn toggle_order(&mut self) {
        self.moves.toggle_order();
    }
}
