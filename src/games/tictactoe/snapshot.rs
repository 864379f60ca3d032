//! Immutable board snapshots.
//!
//! A snapshot records the full board after one ply together with the cell
//! that was played to produce it. Snapshots are never mutated; the next one
//! is derived by copying the cells and setting exactly one of them.

use super::position::Position;
use super::types::{Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Full board state at one point in the move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
    /// Cell played to reach this snapshot; `None` for the initial board.
    origin: Option<Position>,
}

impl BoardSnapshot {
    /// Creates the all-empty initial snapshot.
    pub fn empty() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
            origin: None,
        }
    }

    /// Derives the snapshot that results from `player` marking `pos`.
    ///
    /// Occupancy is not checked here; callers validate the move first.
    pub(crate) fn with_move(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self {
            squares,
            origin: Some(pos),
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns the cell played to produce this snapshot.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Positions that are still open, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based index so a player can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotParseError {
    /// A character that is neither a marker nor an empty symbol.
    #[display("Unexpected board symbol {symbol:?}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },

    /// Wrong number of cells.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells actually present.
        found: usize,
    },
}

impl FromStr for BoardSnapshot {
    type Err = SnapshotParseError;

    /// Parses 9 cells in row-major order.
    ///
    /// `X`/`O` are markers; `.`, `-` and `_` are empty. Whitespace, `|` and
    /// `/` are ignored, so `"XO./.X./..O"` and `"X|O|.\n.|X|.\n.|.|O"` both
    /// parse. The result has no origin cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELL_COUNT);
        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let square = match c {
                '.' | '-' | '_' => Square::Empty,
                other => Player::from_symbol(other)
                    .map(Square::Occupied)
                    .ok_or(SnapshotParseError::InvalidSymbol { symbol: other })?,
            };
            squares.push(square);
        }

        let squares: [Square; CELL_COUNT] = squares
            .try_into()
            .map_err(|v: Vec<Square>| SnapshotParseError::WrongLength { found: v.len() })?;
        Ok(Self {
            squares,
            origin: None,
        })
    }
}
