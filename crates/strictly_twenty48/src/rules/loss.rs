//! Move availability, the basis of loss detection.

use crate::Board;
use crate::types::is_mergeable;
use tracing::instrument;

/// Returns true if an empty cell exists or two adjacent cells can merge.
///
/// A board for which this returns false has no legal move in any direction.
#[instrument(skip(board), fields(size = board.size()))]
pub fn can_move(board: &Board) -> bool {
    if !board.is_full() {
        return true;
    }

    let n = board.size();
    let cells = board.cells();
    let pair = |a: u32, b: u32| a == b && is_mergeable(a);
    let horizontal = (0..n).any(|r| (0..n - 1).any(|c| pair(cells[r * n + c], cells[r * n + c + 1])));
    let vertical = (0..n - 1).any(|r| (0..n).any(|c| pair(cells[r * n + c], cells[(r + 1) * n + c])));
    horizontal || vertical
}
