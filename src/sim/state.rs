//! Round, timer and event types owned by the round engine

use serde::{Deserialize, Serialize};

use super::hint::masked_display;
use crate::format_clock;
use crate::settings::Difficulty;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active word (startup, reset, or a failed load)
    #[default]
    Idle,
    /// A word is on the board waiting for answers
    InRound,
    /// Game ended externally; only a new round leaves this phase
    GameOver,
}

/// The word in play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    word: String,
    scrambled: String,
    /// Letters disclosed from the left, never more than the word length
    pub(super) hint_revealed: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Round {
    pub fn new(word: String, scrambled: String) -> Self {
        Self {
            word,
            scrambled,
            hint_revealed: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn hint_revealed(&self) -> usize {
        self.hint_revealed
    }

    pub fn hints_exhausted(&self) -> bool {
        self.hint_revealed >= self.len()
    }

    /// Hint display for the current reveal count
    pub fn masked(&self) -> String {
        masked_display(&self.word, self.hint_revealed)
    }
}

/// Game clock, driven by external ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub enabled: bool,
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Restart from zero; a disabled timer stays stopped
    pub fn restart(&mut self) {
        self.elapsed_seconds = 0;
        self.running = self.enabled;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Enabled and running for the game in play; only then does the
    /// elapsed reading count toward the speed bonus
    pub fn counting(&self) -> bool {
        self.enabled && self.running
    }

    /// Accept an elapsed reading; ignored when stopped, never goes backwards
    pub fn on_tick(&mut self, elapsed_seconds: u64) {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.max(elapsed_seconds);
        }
    }

    /// `M:SS`, or `--:--` when disabled
    pub fn display(&self) -> String {
        if self.enabled {
            format_clock(self.elapsed_seconds)
        } else {
            "--:--".to_string()
        }
    }
}

/// Final results of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSummary {
    pub final_score: u64,
    pub words_solved: u32,
    pub best_streak: u32,
    pub elapsed_seconds: u64,
}

impl GameSummary {
    pub fn time_played(&self) -> String {
        format_clock(self.elapsed_seconds)
    }
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        scrambled: String,
        difficulty: Difficulty,
    },
    /// No word could be drawn; the engine stays idle
    LoadFailed { difficulty: Difficulty },
    AnswerAccepted {
        points: u64,
        score: u64,
        streak: u32,
    },
    /// `streak_reset` is false for empty submissions
    AnswerRejected { streak_reset: bool },
    HintRevealed { masked: String },
    GameEnded(GameSummary),
}
