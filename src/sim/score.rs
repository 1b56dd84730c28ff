//! Scoring and streak tracking

use serde::{Deserialize, Serialize};

use crate::consts::{POINTS_PER_LETTER, SPEED_BONUS_PER_SEC, SPEED_BONUS_WINDOW_SECS};

/// Points for a correct solve.
///
/// `streak` is the streak *before* this solve. Each streak step adds half
/// the base again, so `base * (1 + streak / 2)` is computed as
/// `base * (2 + streak) / 2` to floor exactly.
pub fn points_for(word_len: usize, elapsed_secs: u64, streak: u32, timer_enabled: bool) -> u64 {
    let mut base = word_len as u64 * POINTS_PER_LETTER;
    if timer_enabled {
        base += SPEED_BONUS_WINDOW_SECS.saturating_sub(elapsed_secs) * SPEED_BONUS_PER_SEC;
    }
    base * (2 + u64::from(streak)) / 2
}

/// Running totals for one game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub streak: u32,
    pub best_streak: u32,
    pub words_solved: u32,
}

impl ScoreState {
    /// Record a correct solve and return the points awarded
    pub fn record_correct(&mut self, word_len: usize, elapsed_secs: u64, timer_enabled: bool) -> u64 {
        let points = points_for(word_len, elapsed_secs, self.streak, timer_enabled);
        self.score += points;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.words_solved += 1;
        points
    }

    /// Record a wrong answer
    pub fn record_incorrect(&mut self) {
        self.streak = 0;
    }
}
