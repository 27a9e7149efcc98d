//! Input adapter: keys and swipes to directions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_new::new;
use strictly_twenty48::Direction;
use tracing::{debug, instrument};

/// Maps an arrow key to its direction. Every other key is ignored.
#[instrument]
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Key bindings for moves.
///
/// Arrow keys are always bound; vi-style and WASD letters are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct KeyMap {
    vim_keys: bool,
    wasd_keys: bool,
}

impl KeyMap {
    /// Resolves a key to a direction under this map.
    #[instrument(skip(self))]
    pub fn direction(&self, key: KeyCode) -> Option<Direction> {
        if let Some(direction) = direction_for_key(key) {
            return Some(direction);
        }
        let KeyCode::Char(c) = key else {
            return None;
        };
        match c.to_ascii_lowercase() {
            'h' if self.vim_keys => Some(Direction::Left),
            'l' if self.vim_keys => Some(Direction::Right),
            'k' if self.vim_keys => Some(Direction::Up),
            'j' if self.vim_keys => Some(Direction::Down),
            'a' if self.wasd_keys => Some(Direction::Left),
            'd' if self.wasd_keys => Some(Direction::Right),
            'w' if self.wasd_keys => Some(Direction::Up),
            's' if self.wasd_keys => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Non-move actions a player can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    /// Discard the current game and start a new one.
    #[display("new game")]
    NewGame,
    /// Leave the program.
    #[display("quit")]
    Quit,
}

/// Maps a key event to a [`Command`], if it is bound to one.
#[instrument]
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(Command::NewGame)
        }
        _ => None,
    }
}

/// A gesture from a start point to an end point in screen coordinates.
///
/// Screen coordinates grow rightward and downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Swipe {
    start: (i32, i32),
    end: (i32, i32),
}

impl Swipe {
    /// Direction of the swipe.
    ///
    /// The larger displacement axis wins; a tie goes to the vertical axis.
    /// A non-positive displacement on the chosen axis means Left or Up.
    #[instrument]
    pub fn direction(&self) -> Direction {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        if dx.abs() > dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Returns true when start and end coincide.
    pub fn is_tap(&self) -> bool {
        self.start == self.end
    }
}

/// Turns left-button mouse drags into swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    /// Creates a tracker with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a mouse event; returns a direction when a drag completes.
    ///
    /// Presses without movement are taps and produce nothing.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: &MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x, y) = self.start.take()?;
                let swipe = Swipe::new(
                    (i32::from(x), i32::from(y)),
                    (i32::from(event.column), i32::from(event.row)),
                );
                if swipe.is_tap() {
                    debug!("Tap ignored");
                    return None;
                }
                let direction = swipe.direction();
                debug!(?swipe, %direction, "Swipe recognised");
                Some(direction)
            }
            _ => None,
        }
    }
}
