//! Win tiers for a finished game.
//!
//! Upper bounds are inclusive: 6 guesses is still a perfect game.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinTier {
    Perfect,
    Win,
    MediocreWin,
    WeakWin,
}

impl WinTier {
    pub fn for_guesses(guess_count: u32) -> Self {
        match guess_count {
            0..=6 => WinTier::Perfect,
            7..=10 => WinTier::Win,
            11..=15 => WinTier::MediocreWin,
            _ => WinTier::WeakWin,
        }
    }

    /// Banner text shown when the game ends.
    pub fn headline(self) -> &'static str {
        match self {
            WinTier::Perfect => "PERFECT!",
            WinTier::Win => "YOU WIN!",
            WinTier::MediocreWin => "You win, I guess.",
            WinTier::WeakWin => "That was pretty good, for a goldfish.",
        }
    }
}

impl fmt::Display for WinTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinTier::Perfect => "Perfect",
            WinTier::Win => "Win",
            WinTier::MediocreWin => "Mediocre win",
            WinTier::WeakWin => "Weak win",
        };
        write!(f, "{}", s)
    }
}
