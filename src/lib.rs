//! Memory-matching card game: find every pair in as few guesses as possible.
//!
//! The engine ([`session`], [`game`]) is independent of any front-end; the
//! terminal UI in [`ui`] is one [`game::Renderer`] implementation.

pub mod args;
pub mod best_score;
pub mod config;
pub mod db;
pub mod deck;
pub mod game;
pub mod scoring;
pub mod session;
pub mod timer;
pub mod ui;
