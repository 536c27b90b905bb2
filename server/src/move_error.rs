use common::BoardError;
use thiserror::Error;

use crate::prediction::PredictionError;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("gameBoard has no empty cell")]
    BoardFull,
    #[error("neural network prediction service failed: {0}")]
    Prediction(#[from] PredictionError),
}
