use thiserror::Error;

/// Domain errors raised by the game core and surfaced to clients as
/// `error` frames.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("the lexicon has no categories")]
    EmptyLexicon,

    #[error("no game is active on this connection")]
    NoActiveGame,

    #[error("grid size must be at least 1")]
    InvalidGridSize,

    #[error("at least one placement direction must be enabled")]
    NoDirections,

    #[error("unknown placement direction: {0}")]
    UnknownDirection(String),

    #[error("the fill alphabet is empty")]
    EmptyAlphabet,
}
