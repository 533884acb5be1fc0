use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::GamePhase, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let view = self.game.renderer();

        let line = if self.game.phase() == GamePhase::Landing {
            Line::from("Generic Memory Game!")
        } else {
            let score_style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            Line::from(vec![
                Span::raw("Current Score: "),
                Span::styled(view.guess_count.to_string(), score_style),
                Span::raw("   All Time Low: "),
                Span::styled(view.best_score.clone(), score_style),
            ])
        };

        f.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Memory Match")),
            area,
        );
    }

    pub(in crate::ui) fn draw_landing(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(format!(
                "Find all {} pairs in as few guesses as you can.",
                self.game.session().pair_count()
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = match self.game.phase() {
            GamePhase::Landing => "Enter = start | Esc / Ctrl+Q = quit",
            GamePhase::Playing => {
                "Arrows = move | Enter/Space = flip | 0-9 = flip card | Esc / Ctrl+Q = quit"
            }
            GamePhase::Finished => "r = play again | Esc / Ctrl+Q = quit",
        };

        f.render_widget(
            Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
