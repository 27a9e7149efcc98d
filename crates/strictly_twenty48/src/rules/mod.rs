//! Game rules for 2048.
//!
//! Pure functions over [`Board`] values. The engine composes them into
//! moves; keeping them free of engine state lets invariants and tests
//! call them directly.

pub mod loss;
pub mod slide;
pub mod spawn;
pub mod win;

pub use loss::can_move;
pub use slide::{LineSlide, slide_line};
pub use spawn::{TWO_PROBABILITY, insert_random_tile};
pub use win::{WINNING_TILE, has_winning_tile};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of a board. Win is checked before loss.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if has_winning_tile(board) {
        GameStatus::Won
    } else if !can_move(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_takes_precedence_over_loss() {
        let board = Board::from_rows(vec![vec![2048, 2], vec![2, 4]]).unwrap();
        assert!(!can_move(&board));
        assert_eq!(evaluate(&board), GameStatus::Won);
    }

    #[test]
    fn test_playing_with_empty_cell() {
        let board = Board::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
        assert_eq!(evaluate(&board), GameStatus::Playing);
    }

    #[test]
    fn test_lost_when_stuck() {
        let board = Board::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
        assert_eq!(evaluate(&board), GameStatus::Lost);
    }
}
