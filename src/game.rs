//! Game controller: drives a [`GameSession`] from player input and timers
//! and pushes every visible change to a [`Renderer`].

use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::{
    best_score::{BestScoreTracker, ScoreStore},
    config::GameConfig,
    deck::{DeckError, FaceState},
    scoring::WinTier,
    session::{GameSession, ScoreState, SelectOutcome, Selection},
    timer::{Scheduler, TimerEvent, TimerFired},
};

/// Output side consumed by the game; implemented by the presentation layer.
pub trait Renderer {
    fn render_card(&mut self, index: usize, face: FaceState);
    fn render_score(&mut self, guess_count: u32, best_score: &str);
    fn render_win(&mut self, message: &str, score_message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Deck dealt, waiting for the player to start.
    Landing,
    Playing,
    /// Win banner is showing.
    Finished,
}

/// Read-only view of the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub faces: Vec<FaceState>,
    pub score: ScoreState,
    pub selection: Selection,
    pub best_score: Option<u32>,
}

pub struct Game<R: Renderer> {
    config: GameConfig,
    session: GameSession,
    tracker: BestScoreTracker<Box<dyn ScoreStore>>,
    scheduler: Scheduler,
    renderer: R,
    rng: StdRng,
    phase: GamePhase,
    generation: u64,
}

impl<R: Renderer> Game<R> {
    /// Build a game and the receiver on which its timers fire.
    ///
    /// The symbol list is validated here, before any card is dealt.
    pub fn new(
        config: GameConfig,
        renderer: R,
        store: Box<dyn ScoreStore>,
        seed: Option<u64>,
    ) -> Result<(Self, UnboundedReceiver<TimerFired>), DeckError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = GameSession::new(&config.symbols, &mut rng)?;
        let (scheduler, timers) = Scheduler::new();

        info!(pairs = session.pair_count(), ?seed, "Game created");

        Ok((
            Self {
                config,
                session,
                tracker: BestScoreTracker::new(store),
                scheduler,
                renderer,
                rng,
                phase: GamePhase::Landing,
                generation: 0,
            },
            timers,
        ))
    }

    pub fn on_start_requested(&mut self) {
        if self.phase != GamePhase::Landing {
            return;
        }
        info!("Game started");
        self.phase = GamePhase::Playing;
        self.render_board();
        self.render_score();
    }

    pub fn on_card_selected(&mut self, index: usize) {
        if self.phase != GamePhase::Playing {
            debug!(index, phase = ?self.phase, "selection outside of play");
            return;
        }

        match self.session.select(index) {
            SelectOutcome::Ignored => return,
            SelectOutcome::Revealed(index) => {
                self.renderer.render_card(index, FaceState::Up);
            }
            SelectOutcome::Matched { first, second } => {
                self.renderer.render_card(first, FaceState::Matched);
                self.renderer.render_card(second, FaceState::Matched);
            }
            SelectOutcome::Won {
                first,
                second,
                guess_count,
            } => {
                self.renderer.render_card(first, FaceState::Matched);
                self.renderer.render_card(second, FaceState::Matched);
                info!(guess_count, "All pairs found");
                self.scheduler.schedule(
                    self.generation,
                    TimerEvent::ShowWin,
                    self.config.win_banner_delay(),
                );
            }
            SelectOutcome::Mismatched { second, .. } => {
                self.renderer.render_card(second, FaceState::Up);
                self.scheduler.schedule(
                    self.generation,
                    TimerEvent::FlipBack,
                    self.config.mismatch_delay(),
                );
            }
        }

        self.render_score();
    }

    pub fn on_timer(&mut self, fired: TimerFired) {
        if fired.generation != self.generation {
            debug!(
                fired = fired.generation,
                current = self.generation,
                "stale timer dropped"
            );
            return;
        }

        match fired.event {
            TimerEvent::FlipBack => {
                if let Some((first, second)) = self.session.resolve_mismatch() {
                    self.renderer.render_card(first, FaceState::Down);
                    self.renderer.render_card(second, FaceState::Down);
                }
            }
            TimerEvent::ShowWin => self.finish(),
        }
    }

    /// Throw the current session away and deal a new one.
    pub fn on_play_again_requested(&mut self) {
        self.scheduler.cancel_all();
        self.generation = self.generation.wrapping_add(1);

        match GameSession::new(&self.config.symbols, &mut self.rng) {
            Ok(session) => self.session = session,
            Err(e) => {
                warn!("Could not deal a new game: {e}");
                return;
            }
        }

        info!(generation = self.generation, "New game dealt");
        self.phase = GamePhase::Playing;
        self.render_board();
        self.render_score();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            faces: self.session.faces(),
            score: self.session.score(),
            selection: self.session.selection(),
            best_score: self.tracker.best(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn best_score_display(&self) -> String {
        self.tracker.display()
    }

    pub fn reset_best_score(&mut self) {
        self.tracker.reset();
        self.render_score();
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.outstanding()
    }

    fn finish(&mut self) {
        if self.phase != GamePhase::Playing || !self.session.is_won() {
            return;
        }

        let guess_count = self.session.score().guess_count;
        let tier = WinTier::for_guesses(guess_count);
        let outcome = self.tracker.compare(guess_count);
        info!(guess_count, %tier, new_best = outcome.is_new_best(), "Game won");

        self.phase = GamePhase::Finished;
        self.renderer.render_win(tier.headline(), &outcome.message());
        self.render_score();
    }

    fn render_board(&mut self) {
        for (index, face) in self.session.faces().into_iter().enumerate() {
            self.renderer.render_card(index, face);
        }
    }

    fn render_score(&mut self) {
        let best = self.tracker.display();
        self.renderer
            .render_score(self.session.score().guess_count, &best);
    }
}
