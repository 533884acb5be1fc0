//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::GamePhase;

use super::super::app::{App, BOARD_COLUMNS};
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }
            _ => {}
        }

        match self.app.game.phase() {
            GamePhase::Landing => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    GameHandler::new(self.app).start();
                }
            }
            GamePhase::Playing => self.handle_board_key(key),
            GamePhase::Finished => {
                if matches!(key.code, KeyCode::Char('r' | 'R') | KeyCode::Enter) {
                    GameHandler::new(self.app).play_again();
                }
            }
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.app.cursor;
                GameHandler::new(self.app).select_card(cursor);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    GameHandler::new(self.app).select_card(index as usize);
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let count = self.app.card_count();
        if count == 0 {
            return;
        }

        let col = (self.app.cursor % BOARD_COLUMNS) as isize + dx;
        let row = (self.app.cursor / BOARD_COLUMNS) as isize + dy;
        if col < 0 || col >= BOARD_COLUMNS as isize || row < 0 {
            return;
        }

        let target = row as usize * BOARD_COLUMNS + col as usize;
        if target < count {
            self.app.cursor = target;
        }
    }
}
