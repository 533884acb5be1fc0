use std::{fmt::Display, io::Stdout, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::{game::Game, timer::TimerFired};

use super::types::{BoardView, LogBuffer};

/// How long to wait for a key before checking the timer channel again.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cards per row on the board.
pub const BOARD_COLUMNS: usize = 5;

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: Game<BoardView>,
    pub(in crate::ui) timers: UnboundedReceiver<TimerFired>,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(game: Game<BoardView>, timers: UnboundedReceiver<TimerFired>, logs: LogBuffer) -> Self {
        Self {
            game,
            timers,
            cursor: 0,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            self.drain_timers();

            terminal.draw(|f| self.draw(f))?;

            if !event::poll(INPUT_POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    /// Apply every timer that has fired since the last frame.
    pub(in crate::ui) fn drain_timers(&mut self) {
        while let Ok(fired) = self.timers.try_recv() {
            super::handlers::GameHandler::new(self).apply_timer(fired);
        }
    }

    pub(in crate::ui) fn card_count(&self) -> usize {
        self.game.session().cards().len()
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
