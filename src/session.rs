//! Single-game state machine: selection, match detection and scoring.

use rand::Rng;
use tracing::debug;

use crate::deck::{Card, Deck, DeckError, FaceState};

/// The face-up, unmatched card waiting for its partner, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Pending(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub guess_count: u32,
    pub match_count: u32,
}

/// What a single selection did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Target was out of range, already up or matched, or a mismatch is still showing.
    Ignored,
    /// First card of a guess turned up.
    Revealed(usize),
    /// Second card matched the first; both are now matched.
    Matched { first: usize, second: usize },
    /// Final pair found.
    Won {
        first: usize,
        second: usize,
        guess_count: u32,
    },
    /// Second card differs; both stay up until [`GameSession::resolve_mismatch`].
    Mismatched { first: usize, second: usize },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    selection: Selection,
    score: ScoreState,
    awaiting_flip_back: Option<(usize, usize)>,
}

impl GameSession {
    /// Deal a freshly shuffled deck. Fails before any card exists if `symbols` is malformed.
    pub fn new<R: Rng>(symbols: &[String], rng: &mut R) -> Result<Self, DeckError> {
        let deck = Deck::shuffled(symbols, rng)?;
        Ok(Self::from_deck(deck))
    }

    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck,
            selection: Selection::Empty,
            score: ScoreState::default(),
            awaiting_flip_back: None,
        }
    }

    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.awaiting_flip_back.is_some() {
            debug!(index, "selection ignored while mismatch is showing");
            return SelectOutcome::Ignored;
        }

        let Some(card) = self.deck.get(index) else {
            debug!(index, "selection ignored: out of range");
            return SelectOutcome::Ignored;
        };
        if card.face != FaceState::Down {
            return SelectOutcome::Ignored;
        }

        match self.selection {
            Selection::Empty => {
                self.deck.set_face(index, FaceState::Up);
                self.selection = Selection::Pending(index);
                SelectOutcome::Revealed(index)
            }
            Selection::Pending(first) => {
                self.score.guess_count += 1;
                self.selection = Selection::Empty;

                if self.symbol_at(first) == self.symbol_at(index) {
                    self.deck.set_face(first, FaceState::Matched);
                    self.deck.set_face(index, FaceState::Matched);
                    self.score.match_count += 1;
                    debug!(first, second = index, matches = self.score.match_count, "pair matched");

                    if self.is_won() {
                        SelectOutcome::Won {
                            first,
                            second: index,
                            guess_count: self.score.guess_count,
                        }
                    } else {
                        SelectOutcome::Matched {
                            first,
                            second: index,
                        }
                    }
                } else {
                    self.deck.set_face(index, FaceState::Up);
                    self.awaiting_flip_back = Some((first, index));
                    debug!(first, second = index, "pair mismatched");
                    SelectOutcome::Mismatched {
                        first,
                        second: index,
                    }
                }
            }
        }
    }

    /// Turn a mismatched pair back down. Returns the pair, or `None` if nothing was pending.
    pub fn resolve_mismatch(&mut self) -> Option<(usize, usize)> {
        let (first, second) = self.awaiting_flip_back.take()?;
        for index in [first, second] {
            if self.face(index) == Some(FaceState::Up) {
                self.deck.set_face(index, FaceState::Down);
            }
        }
        Some((first, second))
    }

    pub fn is_won(&self) -> bool {
        self.score.match_count as usize == self.deck.pair_count()
    }

    pub fn is_awaiting_flip_back(&self) -> bool {
        self.awaiting_flip_back.is_some()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn face(&self, index: usize) -> Option<FaceState> {
        self.deck.get(index).map(|c| c.face)
    }

    pub fn faces(&self) -> Vec<FaceState> {
        self.deck.cards().iter().map(|c| c.face).collect()
    }

    fn symbol_at(&self, index: usize) -> Option<&str> {
        self.deck.get(index).map(|c| c.symbol.as_str())
    }
}
