use thiserror::Error;

use crate::RoundState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Input is not a number")]
    NotANumber,
    #[error("Round size {0} is outside the accepted range")]
    OutOfRange(i64),
    #[error("No such element in this round")]
    InvalidElement,
    #[error("Operation not accepted while the round is {0:?}")]
    WrongPhase(RoundState),
    #[error("Message table could not be parsed: {0}")]
    InvalidMessages(alloc::string::String),
}

pub type Result<T> = core::result::Result<T, GameError>;
