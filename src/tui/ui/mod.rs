//! UI rendering using ratatui.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::store::KeyValueStore;

pub use board::{render_board, tile_style};

/// Draws the whole screen from the app state.
pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly 2048")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    draw_scores(f, chunks[1], app.engine().score(), app.best_score());

    render_board(f, chunks[2], app.engine().board());

    let status_style = if app.engine().is_game_over() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows/drag: move | N: New game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

fn draw_scores(f: &mut Frame, area: Rect, score: u64, best: u64) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(score.to_string(), value),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, cols[0]);

    let best = Paragraph::new(Line::from(vec![
        Span::styled("Best ", label),
        Span::styled(best.to_string(), value),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(best, cols[1]);
}
