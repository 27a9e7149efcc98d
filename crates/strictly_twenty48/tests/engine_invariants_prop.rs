//! Property tests for the board transition engine.
//!
//! Generated boards and move sequences exercise the properties that must
//! hold regardless of the particular position:
//! - sliding conserves the tile sum; only the spawned tile adds to it
//! - tile count drops by one per merge and rises by one per spawn
//! - a move that changes nothing leaves board and score alone
//! - status evaluation is idempotent and agrees with `can_move`

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_twenty48::invariants::{EngineInvariants, InvariantSet};
use strictly_twenty48::{Board, BoardEngine, Direction, GameStatus};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => Just(0u32),
        1 => (1u32..=10).prop_map(|exp| 1 << exp),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    (2usize..=5).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(tile(), n), n)
            .prop_map(|rows| Board::from_rows(rows).expect("generated board is valid"))
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn tile_sum(board: &Board) -> u64 {
    board.cells().iter().map(|v| u64::from(*v)).sum()
}

proptest! {
    #[test]
    fn move_conserves_tiles(board in board(), direction in direction(), seed in any::<u64>()) {
        let before = board.clone();
        let mut engine = BoardEngine::from_board(board, 0, StdRng::seed_from_u64(seed))
            .expect("zero score is valid");
        let outcome = engine.make_move(direction);

        if outcome.moved {
            let spawn = outcome.spawned.expect("a changed board always has room");
            prop_assert!(spawn.value == 2 || spawn.value == 4);
            prop_assert_eq!(
                tile_sum(engine.board()),
                tile_sum(&before) + u64::from(spawn.value)
            );
            prop_assert_eq!(
                engine.board().tile_count(),
                before.tile_count() - outcome.merges + 1
            );
            prop_assert_eq!(engine.score(), outcome.score_delta);
            prop_assert_eq!(outcome.status, engine.status());
        } else {
            prop_assert_eq!(engine.board(), &before);
            prop_assert_eq!(engine.score(), 0);
            prop_assert_eq!(outcome.spawned, None);
            prop_assert_eq!(outcome.score_delta, 0);
        }
    }

    #[test]
    fn full_board_without_pairs_never_moves(board in board(), direction in direction()) {
        let mut engine = BoardEngine::from_board(board, 0, StdRng::seed_from_u64(0))
            .expect("zero score is valid");
        if !engine.can_move() {
            prop_assert!(!engine.make_move(direction).moved);
        }
    }

    #[test]
    fn status_evaluation_is_idempotent(board in board()) {
        let mut engine = BoardEngine::from_board(board, 0, StdRng::seed_from_u64(0))
            .expect("zero score is valid");
        let first = engine.evaluate_status();
        let second = engine.evaluate_status();
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.is_game_over(), first.is_terminal());
        if first == GameStatus::Lost {
            prop_assert!(!engine.can_move());
        }
    }

    #[test]
    fn generated_rollout_respects_invariants(
        seed in any::<u64>(),
        size in 2usize..=6,
        moves in prop::collection::vec(direction(), 1..120),
    ) {
        let mut engine = BoardEngine::seeded(size, seed).expect("positive size");
        let mut last_score = 0;
        for direction in moves {
            let outcome = engine.make_move(direction);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
            prop_assert!(engine.score() >= last_score);
            prop_assert_eq!(engine.score() - last_score, outcome.score_delta);
            last_score = engine.score();
            if engine.is_game_over() {
                prop_assert!(!engine.make_move(Direction::Left).moved);
                break;
            }
        }
    }
}
