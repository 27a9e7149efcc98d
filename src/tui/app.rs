//! Application state for the terminal UI.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use strictly_twenty48::{BoardEngine, Direction, GameStatus, MoveOutcome};
use tracing::{debug, info, instrument, warn};

use crate::best_score::BestScore;
use crate::input::{Command, KeyMap, SwipeTracker, command_for_key};
use crate::store::KeyValueStore;

/// Render-side state wrapped around a [`BoardEngine`].
///
/// After every state change (a new game, or a move that moved) the app
/// records the score with [`BestScore`] and caches the value to display.
#[derive(Debug)]
pub struct App<S> {
    engine: BoardEngine,
    best: BestScore<S>,
    best_value: u64,
    keymap: KeyMap,
    swipes: SwipeTracker,
    status_message: String,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates the app around an already started engine.
    #[instrument(skip(engine, best))]
    pub fn new(engine: BoardEngine, best: BestScore<S>, keymap: KeyMap) -> Self {
        let mut app = Self {
            engine,
            best,
            best_value: 0,
            keymap,
            swipes: SwipeTracker::new(),
            status_message: "Use the arrow keys or drag with the mouse to slide tiles.".to_string(),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// The engine being played.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Best score as of the last refresh.
    pub fn best_score(&self) -> u64 {
        self.best_value
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key),
            Event::Mouse(mouse) => {
                if let Some(direction) = self.swipes.handle(mouse) {
                    self.apply_move(direction);
                }
            }
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(direction) = self.keymap.direction(key.code) {
            self.apply_move(direction);
            return;
        }
        match command_for_key(&key) {
            Some(Command::Quit) => {
                info!("User quit");
                self.should_quit = true;
            }
            Some(Command::NewGame) => self.new_game(),
            None => debug!(?key, "Unbound key ignored"),
        }
    }

    /// Forwards a move to the engine and refreshes if the board changed.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.engine.make_move(direction);
        if outcome.moved {
            self.status_message = match outcome.status {
                GameStatus::Won => "You reached 2048! Press N for a new game.".to_string(),
                GameStatus::Lost => "No moves left. Press N for a new game.".to_string(),
                GameStatus::Playing if outcome.score_delta > 0 => {
                    format!("{} +{}", direction, outcome.score_delta)
                }
                GameStatus::Playing => direction.to_string(),
            };
            self.refresh();
        } else if !self.engine.is_game_over() {
            self.status_message = format!("Nothing slides {}", direction.to_string().to_lowercase());
        }
        outcome
    }

    /// Starts a new game on the same board size.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.status_message = "New game.".to_string();
        self.refresh();
    }

    /// Records the current score and caches the best score to display.
    fn refresh(&mut self) {
        match self.best.record(self.engine.score()) {
            Ok(best) => self.best_value = best,
            Err(e) => {
                warn!(error = %e, "Failed to record best score");
                self.best_value = self.best_value.max(self.engine.score());
                let note = format!("Best score not saved: {}", e.message);
                self.status_message = if self.engine.is_game_over() {
                    format!("{} ({})", self.status_message, note)
                } else {
                    note
                };
            }
        }
    }
}
