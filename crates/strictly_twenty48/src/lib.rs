//! Pure 2048 game logic.
//!
//! The crate models a square board of power-of-two tiles and the
//! transitions produced by sliding it in one of four directions. It has no
//! rendering, input, or persistence concerns; hosts drive a
//! [`BoardEngine`] and read its board and score back.
//!
//! # Example
//!
//! ```
//! use strictly_twenty48::{BoardEngine, Direction};
//!
//! let mut engine = BoardEngine::seeded(4, 42)?;
//! let outcome = engine.make_move(Direction::Left);
//! if outcome.moved {
//!     println!("score {}\n{}", engine.score(), engine.board());
//! }
//! # Ok::<(), strictly_twenty48::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{BoardEngine, DEFAULT_BOARD_SIZE};
pub use error::EngineError;
pub use types::{
    Board, Direction, GameStatus, MAX_TILE, MoveOutcome, Spawn, is_mergeable, is_tile_value,
};
