use std::sync::{Arc, Mutex};

use crate::{deck::FaceState, game::Renderer};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown once the game is won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinBanner {
    pub headline: String,
    pub score_message: String,
}

/// What the terminal currently shows. Filled in by the game through [`Renderer`].
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    pub faces: Vec<FaceState>,
    pub guess_count: u32,
    pub best_score: String,
    pub banner: Option<WinBanner>,
}

impl Renderer for BoardView {
    fn render_card(&mut self, index: usize, face: FaceState) {
        if self.faces.len() <= index {
            self.faces.resize(index + 1, FaceState::Down);
        }
        self.faces[index] = face;
    }

    fn render_score(&mut self, guess_count: u32, best_score: &str) {
        self.guess_count = guess_count;
        self.best_score = best_score.to_string();
    }

    fn render_win(&mut self, message: &str, score_message: &str) {
        self.banner = Some(WinBanner {
            headline: message.to_string(),
            score_message: score_message.to_string(),
        });
    }
}
