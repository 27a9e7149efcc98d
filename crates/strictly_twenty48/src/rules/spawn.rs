//! Random tile insertion.

use crate::{Board, Spawn};
use rand::Rng;
use tracing::{debug, instrument};

/// Probability that a new tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Places a 2 or 4 in a uniformly chosen empty cell.
///
/// Returns `None` without touching the board when it is full.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn insert_random_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawn> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("Board full, no tile inserted");
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(TWO_PROBABILITY) { 2 } else { 4 };
    board.set(row, col, value);

    debug!(row, col, value, "Inserted tile");
    Some(Spawn { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fills_only_empty_cell() {
        let mut board = Board::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let spawn = insert_random_tile(&mut board, &mut rng).unwrap();
        assert_eq!((spawn.row, spawn.col), (1, 1));
        assert!(spawn.value == 2 || spawn.value == 4);
        assert_eq!(board.get(1, 1), Some(spawn.value));
    }

    #[test]
    fn test_full_board_is_noop() {
        let mut board = Board::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(insert_random_tile(&mut board, &mut rng), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_value_distribution_favours_two() {
        let mut rng = StdRng::seed_from_u64(2048);
        let mut fours = 0;
        for _ in 0..2000 {
            let mut board = Board::empty(4).unwrap();
            if insert_random_tile(&mut board, &mut rng).unwrap().value == 4 {
                fours += 1;
            }
        }
        // Expected 200; the bound is loose enough for any seed.
        assert!((100..=300).contains(&fours), "got {fours} fours");
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let mut board = Board::empty(3).unwrap();
            let spawn = insert_random_tile(&mut board, &mut rng).unwrap();
            seen[spawn.row * 3 + spawn.col] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
