//! Card grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    deck::FaceState,
    ui::app::{App, BOARD_COLUMNS},
};

/// Terminal colour for a symbol name, white if unknown.
pub(in crate::ui) fn symbol_color(symbol: &str) -> Color {
    match symbol.to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "orange" => Color::Rgb(255, 165, 0),
        "purple" => Color::Magenta,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Board");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cards = self.game.session().cards();
        let faces = &self.game.renderer().faces;
        let rows = cards.len().div_ceil(BOARD_COLUMNS).max(1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(inner);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, BOARD_COLUMNS as u32); BOARD_COLUMNS])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * BOARD_COLUMNS + col;
                let Some(card) = cards.get(index) else {
                    break;
                };
                let face = faces.get(index).copied().unwrap_or(FaceState::Down);
                self.draw_card(f, *cell, index, &card.symbol, face);
            }
        }
    }

    fn draw_card(&self, f: &mut Frame, area: Rect, index: usize, symbol: &str, face: FaceState) {
        let (label, style) = match face {
            FaceState::Down => ("?".to_string(), Style::default().fg(Color::Gray)),
            FaceState::Up => (
                symbol.to_uppercase(),
                Style::default()
                    .fg(symbol_color(symbol))
                    .add_modifier(Modifier::BOLD),
            ),
            FaceState::Matched => (
                symbol.to_string(),
                Style::default()
                    .fg(symbol_color(symbol))
                    .add_modifier(Modifier::DIM),
            ),
        };

        let border_style = if index == self.cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let border_type = if index == self.cursor {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        f.render_widget(
            Paragraph::new(Line::from(label))
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border_style)
                        .title(index.to_string()),
                ),
            area,
        );
    }
}
