//! The board transition engine.
//!
//! [`BoardEngine`] owns the grid, score, and cached status. Moves mutate it
//! in place and report what happened through [`MoveOutcome`]; nothing here
//! knows how the board is displayed or where input comes from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, instrument};

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, insert_random_tile, slide_line};
use crate::{Board, Direction, EngineError, GameStatus, MoveOutcome};

/// Default side length of a board.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// 2048 game engine.
#[derive(Debug, Clone)]
pub struct BoardEngine<R = StdRng> {
    board: Board,
    score: u64,
    status: GameStatus,
    moves_made: u64,
    rng: R,
}

impl BoardEngine<StdRng> {
    /// Starts a game seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Starts a reproducible game from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `size` is zero.
    #[instrument]
    pub fn seeded(size: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BoardEngine<R> {
    /// Starts a game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `size` is zero.
    #[instrument(skip(rng))]
    pub fn with_rng(size: usize, rng: R) -> Result<Self, EngineError> {
        let mut engine = Self {
            board: Board::empty(size)?,
            score: 0,
            status: GameStatus::Playing,
            moves_made: 0,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Resumes from an explicit board and score.
    ///
    /// The status starts as Playing and is only re-evaluated after a move,
    /// or when [`BoardEngine::evaluate_status`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidScore`] if `score` is not a multiple of
    /// four, since no sequence of merges can produce it.
    #[instrument(skip(board, rng), fields(size = board.size()))]
    pub fn from_board(board: Board, score: u64, rng: R) -> Result<Self, EngineError> {
        if score % 4 != 0 {
            return Err(EngineError::InvalidScore(score));
        }
        Ok(Self {
            board,
            score,
            status: GameStatus::Playing,
            moves_made: 0,
            rng,
        })
    }

    /// Clears the board and score, then places two random tiles.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.start();
    }

    /// Resets onto a board of a different size.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] if `size` is zero; the
    /// current game is left untouched in that case.
    #[instrument(skip(self))]
    pub fn reset_with_size(&mut self, size: usize) -> Result<(), EngineError> {
        self.board = Board::empty(size)?;
        self.start();
        Ok(())
    }

    fn start(&mut self) {
        self.score = 0;
        self.status = GameStatus::Playing;
        self.moves_made = 0;
        insert_random_tile(&mut self.board, &mut self.rng);
        insert_random_tile(&mut self.board, &mut self.rng);
        info!(size = self.board.size(), "Game reset");
    }

    /// Slides every line toward `direction`.
    ///
    /// A move that changes no line leaves board and score untouched and
    /// inserts nothing. After a move that does change the board, one
    /// random tile is inserted and the status re-evaluated. Once the game
    /// is over every move is a silent no-op.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_game_over() {
            debug!(status = %self.status, "Move ignored, game over");
            return MoveOutcome::unmoved(self.status);
        }

        let size = self.board.size();
        let mut next = self.board.clone();
        let mut moved = false;
        let mut score_delta = 0;
        let mut merges = 0;
        for index in 0..size {
            let before = self.board.line(direction, index);
            let slide = slide_line(&before);
            if slide.changed(&before) {
                moved = true;
                score_delta += slide.score;
                merges += slide.merges;
                next.set_line(direction, index, &slide.cells);
            }
        }

        if !moved {
            debug!(%direction, "Move changed nothing");
            return MoveOutcome::unmoved(self.status);
        }

        self.board = next;
        self.score += score_delta;
        self.moves_made += 1;
        let spawned = insert_random_tile(&mut self.board, &mut self.rng);
        let status = self.evaluate_status();

        debug!(
            %direction,
            score_delta,
            merges,
            score = self.score,
            "Move applied"
        );
        self.debug_check_invariants();

        MoveOutcome {
            moved: true,
            score_delta,
            merges,
            spawned,
            status,
        }
    }

    /// Recomputes the status from the board and caches it.
    ///
    /// Calling this repeatedly without a move in between always yields the
    /// same result.
    #[instrument(skip(self))]
    pub fn evaluate_status(&mut self) -> GameStatus {
        let status = rules::evaluate(&self.board);
        if status != self.status && status.is_terminal() {
            info!(%status, score = self.score, max_tile = self.board.max_tile(), "Game over");
        }
        self.status = status;
        status
    }

    /// Returns true if an empty cell or an adjacent equal pair exists.
    #[instrument(skip(self))]
    pub fn can_move(&self) -> bool {
        rules::can_move(&self.board)
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Engine invariant violated");
            debug_assert!(false, "Engine invariant violated: {descriptions}");
        }
    }
}

impl<R> BoardEngine<R> {
    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Accumulated score since the last reset.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Cached status from the last evaluation.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or lost.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of successful moves since the last reset.
    pub fn moves_made(&self) -> u64 {
        self.moves_made
    }
}
