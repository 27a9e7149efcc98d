//! Win detection.

use crate::Board;
use tracing::instrument;

/// Tile value that wins the game.
pub const WINNING_TILE: u32 = 2048;

/// Returns true if any cell equals [`WINNING_TILE`].
#[instrument(skip(board))]
pub fn has_winning_tile(board: &Board) -> bool {
    board.contains(WINNING_TILE)
}
