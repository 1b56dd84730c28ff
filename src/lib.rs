//! Word Scramble - a timed word-unscrambling game
//!
//! Core modules:
//! - `sim`: Deterministic round engine (word draws, scrambles, scoring, hints)
//! - `settings`: Difficulty tiers and player preferences
//! - `error`: Error taxonomy shared by the engine and the driver

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{GameError, GameResult};
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Number of recently issued words suppressed from the next draws
    pub const RECENT_WINDOW: usize = 20;

    /// Scramble attempts before accepting a best-effort permutation
    pub const MAX_SCRAMBLE_ATTEMPTS: u32 = 50;
    /// Fisher-Yates passes per scramble attempt
    pub const SHUFFLE_PASSES: u32 = 3;
    /// Minimum positions that must differ for words longer than 2 letters
    pub const MIN_DISPLACED: usize = 2;
    /// Words this short or shorter must not keep both end letters in place
    pub const END_GUARD_MAX_LEN: usize = 4;

    /// Base points per letter of the solved word
    pub const POINTS_PER_LETTER: u64 = 10;
    /// Seconds after which the speed bonus is gone
    pub const SPEED_BONUS_WINDOW_SECS: u64 = 30;
    /// Bonus points per second left in the speed window
    pub const SPEED_BONUS_PER_SEC: u64 = 2;

    /// Placeholder for unrevealed letters in the hint display
    pub const HINT_MASK: char = '_';
    /// Placeholder used to pad the answer buffer before a hinted letter
    pub const ANSWER_BLANK: char = ' ';
}

/// Trim and uppercase a submitted answer
#[inline]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Keep ASCII letters only, uppercased, capped at `max_len` characters
#[inline]
pub fn filter_letters(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(max_len)
        .collect()
}

/// Format whole seconds as `M:SS`
#[inline]
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
