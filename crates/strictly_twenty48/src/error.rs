//! Errors raised while constructing boards and engines.

/// Error building a board or engine.
///
/// Moves never fail; only construction validates its input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Board side length must be at least one.
    #[display("Board size must be positive, got {}", _0)]
    InvalidBoardSize(usize),

    /// A row's length does not match the number of rows.
    #[display("Row {} has {} cells, expected {}", row, len, expected)]
    NotSquare {
        /// Required row length.
        expected: usize,
        /// Offending row.
        row: usize,
        /// Its actual length.
        len: usize,
    },

    /// A cell holds something other than zero or a power of two.
    #[display("Cell ({}, {}) holds {}, which is not a tile value", row, col, value)]
    InvalidTile {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Rejected value.
        value: u32,
    },

    /// A resumed score that merges could never have produced.
    #[display("Score {} is not a multiple of 4", _0)]
    InvalidScore(u64),
}

impl std::error::Error for EngineError {}
