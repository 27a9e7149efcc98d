//! Strictly 2048 - the 2048 sliding-tile game in the terminal.
//!
//! The game rules live in [`strictly_twenty48`]; this crate wires them to
//! the outside world.
//!
//! # Architecture
//!
//! - **Input**: arrow keys and mouse drags become [`Direction`]s
//! - **Render**: a ratatui [`App`] redraws after every state change
//! - **Store**: the best score persists through a [`KeyValueStore`]
//! - **Config**: TOML settings plus CLI overrides
//!
//! # Example
//!
//! ```
//! use strictly_2048::{BestScore, MemoryStore};
//!
//! # fn example() -> Result<(), strictly_2048::StoreError> {
//! let mut best = BestScore::new(MemoryStore::new());
//! assert_eq!(best.record(128)?, 128);
//! assert_eq!(best.record(64)?, 128);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod best_score;
mod cli;
mod config;
mod input;
mod store;
mod tui;

// Crate-level exports - Best score
pub use best_score::{BEST_SCORE_KEY, BestScore};

// Crate-level exports - CLI
pub use cli::{Cli, Command, PlayArgs, StoreArgs};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Input adapter
pub use input::{Command as InputCommand, KeyMap, Swipe, SwipeTracker, command_for_key, direction_for_key};

// Crate-level exports - Persistence
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

// Crate-level exports - Terminal UI
pub use tui::{App, draw, render_board, run as run_tui, tile_style};

// Crate-level exports - Engine types
pub use strictly_twenty48::{Board, BoardEngine, Direction, GameStatus, MoveOutcome};
