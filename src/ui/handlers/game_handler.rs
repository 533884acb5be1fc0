//! Game state transitions triggered from the UI.

use crate::{
    game::GamePhase,
    timer::{TimerEvent, TimerFired},
};

use super::super::app::App;

/// Helper struct for forwarding UI actions to the game and logging them.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start(&mut self) {
        if self.app.game.phase() == GamePhase::Landing {
            self.app.log("Game started");
            self.app.game.on_start_requested();
        }
    }

    pub fn select_card(&mut self, index: usize) {
        if index >= self.app.card_count() {
            return;
        }
        self.app.cursor = index;

        let before = self.app.game.session().score();
        self.app.game.on_card_selected(index);
        let after = self.app.game.session().score();

        if after.match_count > before.match_count {
            self.app.log(format!(
                "Match! {} of {} pairs found",
                after.match_count,
                self.app.game.session().pair_count()
            ));
        } else if after.guess_count > before.guess_count {
            self.app.log(format!("No match (guess {})", after.guess_count));
        }
    }

    pub fn play_again(&mut self) {
        self.app.log("Starting new game");
        self.app.game.renderer_mut().banner = None;
        self.app.game.on_play_again_requested();
        self.app.cursor = 0;
    }

    pub fn apply_timer(&mut self, fired: TimerFired) {
        self.app.game.on_timer(fired);
        if fired.event == TimerEvent::ShowWin && self.app.game.phase() == GamePhase::Finished {
            self.app.log(format!(
                "Game won in {} guesses",
                self.app.game.session().score().guess_count
            ));
        }
    }
}
