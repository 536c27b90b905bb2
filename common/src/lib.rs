pub mod config;
pub mod logger;
pub mod tictactoe;

pub use tictactoe::{Board, BoardError, Mark, NUM_CELLS};
