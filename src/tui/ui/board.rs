//! Board grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_twenty48::Board;

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

/// Renders the board as a grid of bordered cells, centred in `area`.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let n = u16::try_from(board.size()).unwrap_or(u16::MAX);
    let board_area = center_rect(
        area,
        n.saturating_mul(CELL_WIDTH),
        n.saturating_mul(CELL_HEIGHT),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); board.size()])
        .split(board_area);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); board.size()])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            let value = board.get(r, c).unwrap_or(0);
            draw_cell(f, *cell_area, value);
        }
    }
}

fn draw_cell(f: &mut Frame, area: Rect, value: u32) {
    let text = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };
    let cell = Paragraph::new(text)
        .style(tile_style(value))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(cell, area);
}

/// Colour scheme for a tile value.
pub fn tile_style(value: u32) -> Style {
    let (fg, bg) = match value {
        0 => (Color::DarkGray, Color::Reset),
        2 => (Color::Rgb(119, 110, 101), Color::Rgb(238, 228, 218)),
        4 => (Color::Rgb(119, 110, 101), Color::Rgb(237, 224, 200)),
        8 => (Color::White, Color::Rgb(242, 177, 121)),
        16 => (Color::White, Color::Rgb(245, 149, 99)),
        32 => (Color::White, Color::Rgb(246, 124, 95)),
        64 => (Color::White, Color::Rgb(246, 94, 59)),
        128 => (Color::White, Color::Rgb(237, 207, 114)),
        256 => (Color::White, Color::Rgb(237, 204, 97)),
        512 => (Color::White, Color::Rgb(237, 200, 80)),
        1024 => (Color::White, Color::Rgb(237, 197, 63)),
        2048 => (Color::White, Color::Rgb(237, 194, 46)),
        _ => (Color::White, Color::Rgb(60, 58, 50)),
    };
    let style = Style::default().fg(fg).bg(bg);
    if value >= 8 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
