//! Cached status agrees with the board.

use super::Invariant;
use crate::rules::{can_move, has_winning_tile};
use crate::{BoardEngine, GameStatus};

/// Invariant: a terminal cached status is justified by the board.
///
/// Won requires the winning tile on the board. Lost requires a board with
/// no available move and no winning tile.
pub struct CachedStatusConsistent;

impl<R> Invariant<BoardEngine<R>> for CachedStatusConsistent {
    fn holds(engine: &BoardEngine<R>) -> bool {
        let board = engine.board();
        match engine.status() {
            GameStatus::Playing => true,
            GameStatus::Won => has_winning_tile(board),
            GameStatus::Lost => !has_winning_tile(board) && !can_move(board),
        }
    }

    fn description() -> &'static str {
        "Cached game status matches the board"
    }
}
