//! Score parity.

use super::Invariant;
use crate::BoardEngine;

/// Invariant: the score is a multiple of four.
///
/// The smallest merge is 2 + 2 and every merge result is a power of two,
/// so each increment is divisible by four.
pub struct ScoreMultipleOfFour;

impl<R> Invariant<BoardEngine<R>> for ScoreMultipleOfFour {
    fn holds(engine: &BoardEngine<R>) -> bool {
        engine.score() % 4 == 0
    }

    fn description() -> &'static str {
        "Score is a sum of merge results"
    }
}
