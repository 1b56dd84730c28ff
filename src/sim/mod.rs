//! Deterministic round engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected, seeded RNG only
//! - Time arrives as external ticks
//! - No terminal, rendering or audio dependencies

pub mod engine;
pub mod hint;
pub mod scramble;
pub mod score;
pub mod state;
pub mod tick;
pub mod words;

pub use engine::{InputStatus, RoundEngine, SubmitOutcome};
pub use hint::{HintReveal, masked_display};
pub use scramble::{Scramble, displaced, scramble};
pub use score::{ScoreState, points_for};
pub use state::{GameEvent, GamePhase, GameSummary, Round, TimerState};
pub use tick::{PlayerInput, apply};
pub use words::{SharedWordBank, WordBank, WordSupply, default_words, lock_bank};
