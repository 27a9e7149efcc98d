//! Terminal UI for strictly_2048.

mod app;
mod ui;

pub use app::App;
pub use ui::{draw, render_board, tile_style};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_twenty48::BoardEngine;
use tracing::{error, info, instrument};

use crate::best_score::BestScore;
use crate::config::AppConfig;
use crate::input::KeyMap;
use crate::store::{JsonFileStore, KeyValueStore};

/// Runs the terminal UI until the player quits.
#[instrument(skip(config), fields(board_size = *config.board_size()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting Strictly 2048 TUI");

    let engine = match config.seed() {
        Some(seed) => BoardEngine::seeded(*config.board_size(), *seed),
        None => BoardEngine::new(*config.board_size()),
    }
    .context("Failed to start game")?;
    let best = BestScore::new(JsonFileStore::new(config.best_score_path()));
    let keymap = KeyMap::new(*config.vim_keys(), *config.wasd_keys());
    let mut app = App::new(engine, best, keymap);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        score = app.engine().score(),
        best = app.best_score(),
        "Session ended"
    );
    res
}

/// Draws, then waits briefly for input, until the app asks to quit.
fn run_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            app.handle_event(&event);
        }
    }
}
