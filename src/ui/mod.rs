mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{BoardView, LogBuffer, WinBanner};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{best_score::ScoreStore, config::GameConfig, game::Game};

/// Entry point for running the UI.
pub fn run_ui(config: GameConfig, store: Box<dyn ScoreStore>, seed: Option<u64>) -> Result<()> {
    let logs = LogBuffer::new();

    let (game, timers) = Game::new(config, BoardView::default(), store, seed)?;
    let mut app = App::new(game, timers, logs.clone());

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
