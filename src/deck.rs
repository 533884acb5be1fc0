//! Cards, deck construction and the unbiased shuffle.

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

/// Visible state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceState {
    Down,
    Up,
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub symbol: String,
    pub face: FaceState,
}

/// Rejected symbol multisets. Raised before any card is created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("symbol list is empty")]
    Empty,

    #[error("symbol list has an odd number of entries ({0})")]
    OddCount(usize),

    #[error("symbol '{symbol}' appears {count} times, expected exactly 2")]
    NotAPair { symbol: String, count: usize },
}

/// Shuffle `items` in place with Fisher-Yates.
///
/// `j` is drawn from `0..=i`; drawing from `0..i` would never leave an item
/// where it started and the result would be biased.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    if items.len() <= 1 {
        return;
    }

    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Check that every symbol appears exactly twice. Returns the pair count K.
pub fn validate_symbols(symbols: &[String]) -> Result<usize, DeckError> {
    if symbols.is_empty() {
        return Err(DeckError::Empty);
    }
    if symbols.len() % 2 != 0 {
        return Err(DeckError::OddCount(symbols.len()));
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for symbol in symbols {
        *counts.entry(symbol.as_str()).or_insert(0) += 1;
    }

    // Report the first offender in input order so the error is stable.
    for symbol in symbols {
        let count = counts[symbol.as_str()];
        if count != 2 {
            return Err(DeckError::NotAPair {
                symbol: symbol.clone(),
                count,
            });
        }
    }

    Ok(symbols.len() / 2)
}

/// Ordered cards of one game, each symbol present exactly twice.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    pair_count: usize,
}

impl Deck {
    /// Validate `symbols`, shuffle them and lay them out face down.
    pub fn shuffled<R: Rng>(symbols: &[String], rng: &mut R) -> Result<Self, DeckError> {
        let pair_count = validate_symbols(symbols)?;

        let mut order = symbols.to_vec();
        shuffle(&mut order, rng);

        let cards = order
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card {
                index,
                symbol,
                face: FaceState::Down,
            })
            .collect();

        Ok(Self { cards, pair_count })
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn set_face(&mut self, index: usize, face: FaceState) {
        if let Some(card) = self.cards.get_mut(index) {
            card.face = face;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn symbols(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shuffle_empty_and_single_are_noops() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![7];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_shuffle_can_leave_item_in_place() {
        // An exclusive upper bound would make a fixed point at the last slot impossible.
        let mut rng = StdRng::seed_from_u64(99);
        let stayed = (0..1000).any(|_| {
            let mut items = vec![0, 1, 2];
            shuffle(&mut items, &mut rng);
            items[2] == 2
        });
        assert!(stayed);
    }

    #[test]
    fn test_shuffle_position_distribution_is_uniform() {
        const TRIALS: usize = 40_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [[0usize; 4]; 4];

        for _ in 0..TRIALS {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            for (position, &value) in items.iter().enumerate() {
                counts[position][value] += 1;
            }
        }

        let expected = TRIALS as f64 / 4.0;
        for row in counts {
            let chi_square: f64 = row
                .iter()
                .map(|&observed| {
                    let diff = observed as f64 - expected;
                    diff * diff / expected
                })
                .sum();
            // 3 degrees of freedom, p = 0.001
            assert!(chi_square < 16.27, "chi-square {chi_square} for row {row:?}");
        }
    }

    #[test]
    fn test_shuffle_reaches_every_permutation_evenly() {
        const TRIALS: usize = 48_000;
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen: HashMap<[u8; 4], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *seen.entry(items).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 24);
        let expected = TRIALS as f64 / 24.0;
        let chi_square: f64 = seen
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // 23 degrees of freedom, p = 0.001
        assert!(chi_square < 49.73, "chi-square {chi_square}");
    }

    #[test]
    fn test_validate_symbols_accepts_pairs() {
        let pairs = symbols(&["red", "blue", "red", "blue"]);
        assert_eq!(validate_symbols(&pairs), Ok(2));
    }

    #[test]
    fn test_validate_symbols_rejects_malformed_lists() {
        assert_eq!(validate_symbols(&[]), Err(DeckError::Empty));
        assert_eq!(
            validate_symbols(&symbols(&["red", "red", "blue"])),
            Err(DeckError::OddCount(3))
        );
        assert_eq!(
            validate_symbols(&symbols(&["red", "red", "red", "red"])),
            Err(DeckError::NotAPair {
                symbol: "red".to_string(),
                count: 4
            })
        );
        assert_eq!(
            validate_symbols(&symbols(&["red", "blue", "green", "red"])),
            Err(DeckError::NotAPair {
                symbol: "blue".to_string(),
                count: 1
            })
        );
    }

    #[test]
    fn test_deck_starts_face_down_with_ordinal_indices() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = Deck::shuffled(&symbols(&["a", "b", "c", "a", "b", "c"]), &mut rng).unwrap();

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.face, FaceState::Down);
        }
    }

    #[test]
    fn test_deck_rejects_bad_symbols_before_dealing() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = Deck::shuffled(&symbols(&["a", "b"]), &mut rng).unwrap_err();
        assert!(matches!(err, DeckError::NotAPair { .. }));
    }

    proptest! {
        #[test]
        fn prop_shuffle_is_a_permutation(mut items in proptest::collection::vec(0u8..6, 0..40), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut expected = items.clone();
            shuffle(&mut items, &mut rng);

            items.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(items, expected);
        }
    }
}
