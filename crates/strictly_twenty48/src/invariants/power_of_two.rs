//! Every tile is a power of two.

use super::Invariant;
use crate::BoardEngine;
use crate::types::is_tile_value;

/// Invariant: every non-empty cell holds a power of two of at least 2.
pub struct PowerOfTwoTiles;

impl<R> Invariant<BoardEngine<R>> for PowerOfTwoTiles {
    fn holds(engine: &BoardEngine<R>) -> bool {
        engine.board().cells().iter().all(|v| is_tile_value(*v))
    }

    fn description() -> &'static str {
        "Every tile is a power of two"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_holds_through_a_long_game() {
        let mut engine = BoardEngine::seeded(4, 99).unwrap();
        for direction in Direction::ALL.iter().cycle().take(200) {
            engine.make_move(*direction);
            assert!(PowerOfTwoTiles::holds(&engine));
        }
    }
}
