//! Best-score tracking across sessions.

use anyhow::Result;
use tracing::{info, warn};

/// Persistence boundary for the single best-score scalar.
///
/// `get` returns `Ok(None)` when no score has been recorded yet.
pub trait ScoreStore {
    fn get(&self) -> Result<Option<u32>>;
    fn set(&mut self, guess_count: u32) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self) -> Result<Option<u32>> {
        (**self).get()
    }

    fn set(&mut self, guess_count: u32) -> Result<()> {
        (**self).set(guess_count)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Process-lifetime store used by tests and `--ephemeral`.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    value: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(guess_count: u32) -> Self {
        Self {
            value: Some(guess_count),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<Option<u32>> {
        Ok(self.value)
    }

    fn set(&mut self, guess_count: u32) -> Result<()> {
        self.value = Some(guess_count);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}

/// Stand-in when the real store could not be opened. Never remembers anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableScoreStore;

impl ScoreStore for UnavailableScoreStore {
    fn get(&self) -> Result<Option<u32>> {
        Ok(None)
    }

    fn set(&mut self, _guess_count: u32) -> Result<()> {
        anyhow::bail!("score storage is unavailable")
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestScoreOutcome {
    NewBest { guess_count: u32 },
    Missed { best: u32 },
    Tied { best: u32 },
}

impl BestScoreOutcome {
    pub fn is_new_best(&self) -> bool {
        matches!(self, BestScoreOutcome::NewBest { .. })
    }

    pub fn message(&self) -> String {
        match self {
            BestScoreOutcome::NewBest { guess_count } => {
                format!("your new all time low is {}!", guess_count)
            }
            BestScoreOutcome::Missed { best } => {
                format!("but you fail to beat your all time low of {}", best)
            }
            BestScoreOutcome::Tied { .. } => "you've tied your all time low!".to_string(),
        }
    }
}

/// Compares finished sessions against the stored best and updates it.
pub struct BestScoreTracker<S> {
    store: S,
}

impl<S: ScoreStore> BestScoreTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored best, with unreadable storage treated as "no best yet".
    pub fn best(&self) -> Option<u32> {
        match self.store.get() {
            Ok(best) => best,
            Err(e) => {
                warn!("Best score unavailable, treating as unset: {e:#}");
                None
            }
        }
    }

    /// Text for the score panel: the best score, or "no wins".
    pub fn display(&self) -> String {
        self.best()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "no wins".to_string())
    }

    pub fn compare(&mut self, guess_count: u32) -> BestScoreOutcome {
        let outcome = match self.best() {
            Some(best) if guess_count > best => BestScoreOutcome::Missed { best },
            Some(best) if guess_count == best => BestScoreOutcome::Tied { best },
            _ => BestScoreOutcome::NewBest { guess_count },
        };

        if outcome.is_new_best() {
            match self.store.set(guess_count) {
                Ok(()) => info!(guess_count, "New best score recorded"),
                Err(e) => warn!("Failed to persist best score: {e:#}"),
            }
        }

        outcome
    }

    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear best score: {e:#}");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self) -> Result<Option<u32>> {
            anyhow::bail!("corrupt row")
        }

        fn set(&mut self, _guess_count: u32) -> Result<()> {
            anyhow::bail!("read-only")
        }

        fn clear(&mut self) -> Result<()> {
            anyhow::bail!("read-only")
        }
    }

    #[test]
    fn test_first_session_sets_best() {
        let mut tracker = BestScoreTracker::new(MemoryScoreStore::new());

        let outcome = tracker.compare(7);

        assert_eq!(outcome, BestScoreOutcome::NewBest { guess_count: 7 });
        assert!(outcome.is_new_best());
        assert_eq!(outcome.message(), "your new all time low is 7!");
        assert_eq!(tracker.best(), Some(7));
    }

    #[test]
    fn test_worse_session_keeps_best() {
        let mut tracker = BestScoreTracker::new(MemoryScoreStore::with_best(5));

        let outcome = tracker.compare(9);

        assert_eq!(outcome, BestScoreOutcome::Missed { best: 5 });
        assert!(!outcome.is_new_best());
        assert!(outcome.message().contains('5'));
        assert_eq!(tracker.best(), Some(5));
    }

    #[test]
    fn test_equal_session_ties() {
        let mut tracker = BestScoreTracker::new(MemoryScoreStore::with_best(6));

        let outcome = tracker.compare(6);

        assert_eq!(outcome, BestScoreOutcome::Tied { best: 6 });
        assert_eq!(outcome.message(), "you've tied your all time low!");
        assert_eq!(tracker.best(), Some(6));
    }

    #[test]
    fn test_better_session_replaces_best() {
        let mut tracker = BestScoreTracker::new(MemoryScoreStore::with_best(9));

        assert!(tracker.compare(6).is_new_best());
        assert_eq!(tracker.best(), Some(6));
    }

    #[test]
    fn test_broken_store_behaves_as_unset() {
        let mut tracker = BestScoreTracker::new(BrokenStore);

        assert_eq!(tracker.best(), None);
        assert_eq!(tracker.display(), "no wins");
        assert!(tracker.compare(12).is_new_best());
        tracker.reset();
    }

    #[test]
    fn test_unavailable_store_never_remembers() {
        let mut tracker = BestScoreTracker::new(UnavailableScoreStore);

        assert!(tracker.compare(8).is_new_best());
        assert!(tracker.compare(20).is_new_best());
        assert_eq!(tracker.best(), None);
    }

    #[test]
    fn test_display_and_reset() {
        let store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::with_best(4));
        let mut tracker = BestScoreTracker::new(store);

        assert_eq!(tracker.display(), "4");
        tracker.reset();
        assert_eq!(tracker.display(), "no wins");
    }
}
