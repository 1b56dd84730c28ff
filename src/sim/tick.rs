//! Presentation-layer input commands
//!
//! Every trigger the driver can deliver, routed to the engine in one place.

use rand::Rng;

use super::engine::{InputStatus, RoundEngine};
use crate::error::GameResult;
use crate::settings::Difficulty;

/// A single trigger from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    SetDifficulty(Difficulty),
    SetTimerEnabled(bool),
    StartGame,
    /// Typed text; replaces the answer buffer and submits once it is full
    Type(String),
    /// A typed line and Enter: the letters continue the answer buffer,
    /// which is then submitted
    Enter(String),
    /// Submit text directly, ignoring the buffer
    SubmitAnswer(String),
    /// Backspace clears the whole answer
    ClearAnswer,
    RequestHint,
    EndGame,
    /// Elapsed whole seconds since the game started
    Tick(u64),
}

/// Apply one input to the engine
pub fn apply<R: Rng>(engine: &mut RoundEngine<R>, input: &PlayerInput) -> GameResult<()> {
    match input {
        PlayerInput::SetDifficulty(difficulty) => engine.set_difficulty(*difficulty),
        PlayerInput::SetTimerEnabled(enabled) => engine.set_timer_enabled(*enabled),
        PlayerInput::StartGame => engine.start_game()?,
        PlayerInput::Type(raw) => {
            if engine.update_answer(raw)? == InputStatus::Complete {
                engine.submit_buffer()?;
            }
        }
        PlayerInput::Enter(raw) => {
            engine.continue_answer(raw)?;
            engine.submit_buffer()?;
        }
        PlayerInput::SubmitAnswer(raw) => {
            engine.submit(raw)?;
        }
        PlayerInput::ClearAnswer => engine.clear_answer(),
        PlayerInput::RequestHint => {
            engine.request_hint()?;
        }
        PlayerInput::EndGame => {
            engine.end_game();
        }
        PlayerInput::Tick(elapsed) => engine.on_tick(*elapsed),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::sim::state::{GameEvent, GamePhase};
    use crate::sim::words::{WordBank, WordSupply};

    fn engine() -> RoundEngine {
        let supply = WordSupply {
            medium: vec!["PLANET".into()],
            ..Default::default()
        };
        RoundEngine::new(WordBank::from_supply(&supply).into_shared(), 99)
    }

    #[test]
    fn test_full_game_through_inputs() {
        let mut engine = engine();
        let inputs = [
            PlayerInput::SetDifficulty(Difficulty::Medium),
            PlayerInput::StartGame,
            PlayerInput::Tick(1),
            PlayerInput::Tick(2),
            PlayerInput::Type("plan".into()),
            PlayerInput::RequestHint,
            PlayerInput::Type("planet".into()),
            PlayerInput::Tick(3),
            PlayerInput::EndGame,
        ];
        for input in &inputs {
            apply(&mut engine, input).unwrap();
        }

        assert_eq!(engine.phase(), GamePhase::GameOver);
        let summary = engine.summary();
        assert_eq!(summary.words_solved, 1);
        assert_eq!(summary.elapsed_seconds, 3);
        // 6 letters at 2 seconds, no streak yet
        assert_eq!(summary.final_score, 60 + 56);

        let events = engine.take_events();
        assert!(events.contains(&GameEvent::HintRevealed {
            masked: "P _ _ _ _ _".into()
        }));
        assert!(matches!(events.last(), Some(GameEvent::GameEnded(_))));
    }

    #[test]
    fn test_partial_typing_does_not_submit() {
        let mut engine = engine();
        apply(&mut engine, &PlayerInput::SetDifficulty(Difficulty::Medium)).unwrap();
        apply(&mut engine, &PlayerInput::StartGame).unwrap();
        apply(&mut engine, &PlayerInput::Type("PLA".into())).unwrap();
        assert_eq!(engine.answer(), "PLA");
        assert_eq!(engine.score().words_solved, 0);

        apply(&mut engine, &PlayerInput::ClearAnswer).unwrap();
        assert_eq!(engine.answer(), "");
    }

    #[test]
    fn test_hint_letters_complete_the_typed_line() {
        let mut engine = engine();
        apply(&mut engine, &PlayerInput::SetDifficulty(Difficulty::Medium)).unwrap();
        apply(&mut engine, &PlayerInput::StartGame).unwrap();
        apply(&mut engine, &PlayerInput::RequestHint).unwrap();
        apply(&mut engine, &PlayerInput::RequestHint).unwrap();
        assert_eq!(engine.answer(), "PL");

        apply(&mut engine, &PlayerInput::Enter("anet".into())).unwrap();
        assert_eq!(engine.score().words_solved, 1);
        assert_eq!(engine.answer(), "");
    }

    #[test]
    fn test_short_line_is_submitted_and_cleared() {
        let mut engine = engine();
        apply(&mut engine, &PlayerInput::SetDifficulty(Difficulty::Medium)).unwrap();
        apply(&mut engine, &PlayerInput::StartGame).unwrap();
        apply(&mut engine, &PlayerInput::RequestHint).unwrap();
        apply(&mut engine, &PlayerInput::Enter("lan".into())).unwrap();

        assert_eq!(engine.score().words_solved, 0);
        assert_eq!(engine.answer(), "");
        assert!(matches!(
            engine.take_events().last(),
            Some(GameEvent::AnswerRejected { streak_reset: true })
        ));
        assert!(matches!(
            apply(&mut engine, &PlayerInput::Enter(String::new())),
            Err(GameError::MalformedAnswer)
        ));
    }

    #[test]
    fn test_errors_surface_as_results() {
        let mut engine = engine();
        assert!(matches!(
            apply(&mut engine, &PlayerInput::RequestHint),
            Err(GameError::NoActiveRound)
        ));
        apply(&mut engine, &PlayerInput::StartGame).unwrap();
        assert!(matches!(
            apply(&mut engine, &PlayerInput::SubmitAnswer(" ".into())),
            Err(GameError::MalformedAnswer)
        ));
    }
}
