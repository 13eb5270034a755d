use crate::Position;
use thiserror::Error;

/// Recoverable play-time failures surfaced to the driving caller.
/// None of these poison the engine; a new hand can always be started
/// with `reset`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("deck is out of cards")]
    DeckExhausted,
    #[error("seat {0} is not at this table")]
    InvalidPlayer(Position),
    #[error("hand is over, no further actions accepted")]
    HandOver,
}
