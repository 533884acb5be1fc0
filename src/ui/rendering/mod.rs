pub(in crate::ui) mod banner;
pub(in crate::ui) mod board;
mod logs;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{game::GamePhase, ui::app::App};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score / title
                Constraint::Min(10),   // Board
                Constraint::Length(3), // Key help
                Constraint::Length(8), // Logs
            ])
            .split(f.area());

        self.draw_status(f, layout[0]);

        if self.game.phase() == GamePhase::Landing {
            self.draw_landing(f, layout[1]);
        } else {
            self.draw_board(f, layout[1]);
        }

        self.draw_help(f, layout[2]);
        self.draw_logs(f, layout[3]);

        if self.game.phase() == GamePhase::Finished {
            self.draw_win_banner(f, layout[1]);
        }
    }
}
