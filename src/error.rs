use thiserror::Error;

use crate::settings::Difficulty;

#[derive(Error, Debug)]
pub enum GameError {
    /// Both the configured and the built-in list for a tier are empty
    #[error("Unable to load a word: no {0} words available")]
    WordSupplyExhausted(Difficulty),

    /// Every letter of the current word is already revealed
    #[error("No more hints: every letter is revealed")]
    HintExhausted,

    /// Empty or whitespace-only submission
    #[error("Please enter an answer")]
    MalformedAnswer,

    #[error("No round in progress")]
    NoActiveRound,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type GameResult<T> = Result<T, GameError>;
