//! Win banner popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::app::App;

const BANNER_WIDTH: u16 = 50;
const BANNER_HEIGHT: u16 = 7;

/// Rect of at most `width` x `height` centred in `area`.
pub(in crate::ui) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl App {
    pub(in crate::ui) fn draw_win_banner(&self, f: &mut Frame, area: Rect) {
        let Some(banner) = &self.game.renderer().banner else {
            return;
        };

        let popup = centered(area, BANNER_WIDTH, BANNER_HEIGHT);
        let lines = vec![
            Line::styled(
                banner.headline.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(banner.score_message.clone()),
            Line::from(""),
            Line::from("Press r to play again"),
        ];

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("You did it")),
            popup,
        );
    }
}
