use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("gameBoard argument has invalid state")]
    InvalidLength { length: usize },
    #[error("gameBoard contains invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Invalid gameBoard state: {x_count} X marks and {o_count} O marks")]
    InvalidTurnState { x_count: usize, o_count: usize },
}
