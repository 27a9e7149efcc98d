//! Core domain types for 2048.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

use crate::error::EngineError;

/// Direction of a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Slide every row toward column 0.
    Left,
    /// Slide every row toward the last column.
    Right,
    /// Slide every column toward row 0.
    Up,
    /// Slide every column toward the last row.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns true for moves that operate on rows.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns true when the move's target edge is the high-index end of a line.
    pub fn toward_end(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Square N×N grid of tiles in row-major order.
///
/// A cell holds `0` when empty, otherwise a power of two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `size` is zero.
    #[instrument]
    pub fn empty(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a board from explicit rows, validating shape and tile values.
    ///
    /// # Errors
    ///
    /// Fails if there are no rows, a row length differs from the row count,
    /// or a non-zero cell is not a power of two greater than one.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut board = Self::empty(size)?;
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(EngineError::NotSquare {
                    expected: size,
                    row,
                    len: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                board.set(row, col, value);
            }
        }
        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Rows as owned vectors, top to bottom.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|v| *v != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|v| **v != 0).count()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Returns true if any cell holds `value`.
    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    /// Reads line `index` ordered from the leading edge of `direction`.
    ///
    /// For Left/Up the leading edge is index 0; for Right/Down it is the
    /// last index, so the returned vector is reversed relative to the grid.
    pub fn line(&self, direction: Direction, index: usize) -> Vec<u32> {
        let mut line: Vec<u32> = (0..self.size)
            .map(|i| self.cells[self.line_offset(direction, index, i)])
            .collect();
        if direction.toward_end() {
            line.reverse();
        }
        line
    }

    /// Writes a line produced in leading-edge order back into the grid.
    pub fn set_line(&mut self, direction: Direction, index: usize, values: &[u32]) {
        debug_assert_eq!(values.len(), self.size);
        for (i, value) in values.iter().enumerate() {
            let pos = if direction.toward_end() {
                self.size - 1 - i
            } else {
                i
            };
            let offset = self.line_offset(direction, index, pos);
            self.cells[offset] = *value;
        }
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    fn line_offset(&self, direction: Direction, index: usize, pos: usize) -> usize {
        if direction.is_horizontal() {
            index * self.size + pos
        } else {
            pos * self.size + index
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", value)?;
                }
            }
        }
        Ok(())
    }
}

/// Largest tile a `u32` cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Returns true for `0` (empty) or a power of two from 2 to [`MAX_TILE`].
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Returns true if two equal tiles of this value may merge.
pub fn is_mergeable(value: u32) -> bool {
    value != 0 && value < MAX_TILE
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    Playing,
    /// A tile reached the winning value.
    Won,
    /// The board is full and no adjacent pair can merge.
    Lost,
}

impl GameStatus {
    /// Returns true for Won and Lost.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// A tile inserted into a previously empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value of the new tile (2 or 4).
    pub value: u32,
}

/// Result of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether any line changed.
    pub moved: bool,
    /// Points added to the score by this move.
    pub score_delta: u64,
    /// Number of merges performed.
    pub merges: usize,
    /// Tile inserted after a successful move.
    pub spawned: Option<Spawn>,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Outcome for a rejected or no-op move.
    pub(crate) fn unmoved(status: GameStatus) -> Self {
        Self {
            moved: false,
            score_delta: 0,
            merges: 0,
            spawned: None,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows(vec![
            vec![2, 4, 8, 16],
            vec![32, 64, 128, 256],
            vec![0, 0, 0, 0],
            vec![2, 0, 0, 4],
        ])
        .unwrap()
    }

    #[test]
    fn test_line_leading_edge_order() {
        let board = sample();
        assert_eq!(board.line(Direction::Left, 0), vec![2, 4, 8, 16]);
        assert_eq!(board.line(Direction::Right, 0), vec![16, 8, 4, 2]);
        assert_eq!(board.line(Direction::Up, 0), vec![2, 32, 0, 2]);
        assert_eq!(board.line(Direction::Down, 3), vec![4, 0, 256, 16]);
    }

    #[test]
    fn test_all_matches_variants() {
        use strum::IntoEnumIterator;
        assert_eq!(Direction::iter().collect::<Vec<_>>(), Direction::ALL.to_vec());
        assert_eq!(
            Direction::iter().filter(|d| d.is_horizontal()).count(),
            2
        );
    }

    #[test]
    fn test_set_line_inverts_line() {
        let mut board = sample();
        for direction in Direction::ALL {
            for i in 0..4 {
                let line = board.line(direction, i);
                board.set_line(direction, i, &line);
            }
        }
        assert_eq!(board, sample());

        board.set_line(Direction::Right, 2, &[8, 0, 0, 0]);
        assert_eq!(board.get(2, 3), Some(8));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(vec![]),
            Err(EngineError::InvalidBoardSize(0))
        );
        assert!(matches!(
            Board::from_rows(vec![vec![2, 2], vec![2]]),
            Err(EngineError::NotSquare { row: 1, len: 1, .. })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![3, 0], vec![0, 0]]),
            Err(EngineError::InvalidTile { value: 3, .. })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1]]),
            Err(EngineError::InvalidTile { value: 1, .. })
        ));
    }

    #[test]
    fn test_largest_tile_is_valid_but_not_mergeable() {
        assert!(is_tile_value(MAX_TILE));
        assert!(!is_mergeable(MAX_TILE));
        assert!(is_mergeable(MAX_TILE / 2));
        assert!(!is_mergeable(0));
        assert!(Board::from_rows(vec![vec![MAX_TILE, MAX_TILE], vec![0, 0]]).is_ok());
    }

    #[test]
    fn test_empty_cells_and_counts() {
        let board = sample();
        assert_eq!(board.tile_count(), 10);
        assert_eq!(board.empty_cells(), vec![(2, 0), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
        assert_eq!(board.max_tile(), 256);
        assert!(!board.is_full());
    }

    #[test]
    fn test_display_aligns_columns() {
        let board = Board::from_rows(vec![vec![2, 0], vec![128, 4]]).unwrap();
        assert_eq!(board.to_string(), "  2   .\n128   4");
    }
}
