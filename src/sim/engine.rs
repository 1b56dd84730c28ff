//! Round engine: the game's state machine
//!
//! Owns the round, score and timer for one game. The engine never blocks
//! and holds no clock or thread of its own; an external driver feeds it
//! player input and elapsed-time ticks, then drains the queued events.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::hint::{self, HintReveal};
use super::scramble::scramble;
use super::score::ScoreState;
use super::state::{GameEvent, GamePhase, GameSummary, Round, TimerState};
use super::words::{SharedWordBank, WordSupply, lock_bank};
use crate::error::{GameError, GameResult};
use crate::settings::{Difficulty, Settings};
use crate::{filter_letters, normalize_answer};

/// Result of a non-empty submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct { points: u64 },
    Incorrect,
}

/// State of the answer buffer after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Fewer letters than the word
    Partial,
    /// As many letters as the word; ready to submit
    Complete,
}

pub struct RoundEngine<R = Pcg32> {
    bank: SharedWordBank,
    rng: R,
    difficulty: Difficulty,
    phase: GamePhase,
    round: Option<Round>,
    score: ScoreState,
    timer: TimerState,
    /// Player's in-progress answer
    answer: String,
    events: Vec<GameEvent>,
}

impl RoundEngine<Pcg32> {
    /// Create an engine with a seeded PCG source
    pub fn new(bank: SharedWordBank, seed: u64) -> Self {
        Self::with_rng(bank, Pcg32::seed_from_u64(seed))
    }

    pub fn from_settings(bank: SharedWordBank, settings: &Settings, seed: u64) -> Self {
        let mut engine = Self::new(bank, seed);
        engine.set_difficulty(settings.difficulty);
        engine.set_timer_enabled(settings.timer_enabled);
        engine
    }
}

impl<R: Rng> RoundEngine<R> {
    pub fn with_rng(bank: SharedWordBank, rng: R) -> Self {
        Self {
            bank,
            rng,
            difficulty: Difficulty::default(),
            phase: GamePhase::Idle,
            round: None,
            score: ScoreState::default(),
            timer: TimerState::new(true),
            answer: String::new(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The round in play, if any
    pub fn round(&self) -> Option<&Round> {
        match self.phase {
            GamePhase::InRound => self.round.as_ref(),
            _ => None,
        }
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn bank(&self) -> &SharedWordBank {
        &self.bank
    }

    /// Takes effect from the next round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Disabling stops the clock and the speed bonus; enabling applies
    /// from the next game
    pub fn set_timer_enabled(&mut self, enabled: bool) {
        self.timer.enabled = enabled;
        if !enabled {
            self.timer.stop();
        }
    }

    /// Fresh score and clock, then the first round
    pub fn start_game(&mut self) -> GameResult<()> {
        self.score = ScoreState::default();
        self.timer.restart();
        log::info!(
            "New game: difficulty={}, timer={}",
            self.difficulty,
            self.timer.enabled
        );
        self.start_round(self.difficulty)
    }

    /// Draw, scramble and present a new word. Leaving `GameOver` this way
    /// keeps the score but restarts the clock.
    pub fn start_round(&mut self, difficulty: Difficulty) -> GameResult<()> {
        self.difficulty = difficulty;
        self.answer.clear();
        if self.phase == GamePhase::GameOver {
            self.timer.restart();
        }

        let current = self.round.as_ref().map(|r| r.word().to_string());
        let drawn = lock_bank(&self.bank).draw(difficulty, current.as_deref(), &mut self.rng);
        let word = match drawn {
            Ok(word) => word,
            Err(err) => {
                log::warn!("Failed to load a {} word: {err}", difficulty.as_str());
                self.phase = GamePhase::Idle;
                self.round = None;
                self.events.push(GameEvent::LoadFailed { difficulty });
                return Err(err);
            }
        };

        let scrambled = scramble(&word, &mut self.rng);
        log::debug!(
            "Round: {} -> {} ({} attempts)",
            word,
            scrambled.text,
            scrambled.attempts
        );
        self.events.push(GameEvent::RoundStarted {
            scrambled: scrambled.text.clone(),
            difficulty,
        });
        self.round = Some(Round::new(word, scrambled.text));
        self.phase = GamePhase::InRound;
        Ok(())
    }

    /// Check an answer against the current word.
    ///
    /// A correct answer scores and immediately loads the next word. A wrong
    /// answer resets the streak and keeps the word. Blank answers are
    /// rejected with `MalformedAnswer` and leave the streak alone.
    pub fn submit(&mut self, raw: &str) -> GameResult<SubmitOutcome> {
        let round = self.round().ok_or(GameError::NoActiveRound)?;
        let word_len = round.len();
        let answer = normalize_answer(raw);
        let correct = answer == round.word();
        if answer.is_empty() {
            self.events.push(GameEvent::AnswerRejected {
                streak_reset: false,
            });
            return Err(GameError::MalformedAnswer);
        }

        if !correct {
            self.score.record_incorrect();
            self.answer.clear();
            self.events.push(GameEvent::AnswerRejected { streak_reset: true });
            return Ok(SubmitOutcome::Incorrect);
        }

        let points = self.score.record_correct(
            word_len,
            self.timer.elapsed_seconds,
            self.timer.counting(),
        );
        log::info!(
            "Solved {} for {points} points (streak {})",
            answer,
            self.score.streak
        );
        self.events.push(GameEvent::AnswerAccepted {
            points,
            score: self.score.score,
            streak: self.score.streak,
        });

        self.start_round(self.difficulty)?;
        Ok(SubmitOutcome::Correct { points })
    }

    /// Submit whatever is in the answer buffer
    pub fn submit_buffer(&mut self) -> GameResult<SubmitOutcome> {
        let answer = std::mem::take(&mut self.answer);
        self.submit(&answer)
    }

    /// Replace the answer buffer with letters from raw input, capped at the
    /// word length
    pub fn update_answer(&mut self, raw: &str) -> GameResult<InputStatus> {
        let len = self.round().ok_or(GameError::NoActiveRound)?.len();
        self.answer = filter_letters(raw, len);
        Ok(if self.answer.len() == len {
            InputStatus::Complete
        } else {
            InputStatus::Partial
        })
    }

    /// Add typed letters after the answer buffer; a full-length entry
    /// replaces it instead
    pub fn continue_answer(&mut self, raw: &str) -> GameResult<InputStatus> {
        let len = self.round().ok_or(GameError::NoActiveRound)?.len();
        let typed = filter_letters(raw, len);
        let text = if typed.len() == len {
            typed
        } else {
            format!("{}{typed}", self.answer)
        };
        self.update_answer(&text)
    }

    pub fn clear_answer(&mut self) {
        self.answer.clear();
    }

    /// Reveal the next letter and write it into the answer buffer
    pub fn request_hint(&mut self) -> GameResult<HintReveal> {
        if self.phase != GamePhase::InRound {
            return Err(GameError::NoActiveRound);
        }
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        let reveal = hint::reveal(round)?;
        reveal.apply_to(&mut self.answer);
        self.events.push(GameEvent::HintRevealed {
            masked: reveal.masked.clone(),
        });
        Ok(reveal)
    }

    /// Feed the driver's elapsed-seconds reading
    pub fn on_tick(&mut self, elapsed_seconds: u64) {
        self.timer.on_tick(elapsed_seconds);
    }

    /// Stop the game and report the results
    pub fn end_game(&mut self) -> GameSummary {
        self.timer.stop();
        self.phase = GamePhase::GameOver;
        self.answer.clear();
        let summary = self.summary();
        log::info!(
            "Game over: score={}, solved={}, best streak={}",
            summary.final_score,
            summary.words_solved,
            summary.best_streak
        );
        self.events.push(GameEvent::GameEnded(summary));
        summary
    }

    /// Back to idle with a clean slate
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.round = None;
        self.score = ScoreState::default();
        self.timer = TimerState::new(self.timer.enabled);
        self.answer.clear();
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            final_score: self.score.score,
            words_solved: self.score.words_solved,
            best_streak: self.score.best_streak,
            elapsed_seconds: self.timer.elapsed_seconds,
        }
    }

    /// Merge more words without disturbing the round in play
    pub fn merge_words(&self, supply: &WordSupply) -> usize {
        lock_bank(&self.bank).merge(supply)
    }

    /// Drain queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
