mod board;
mod board_error;
mod mark;

pub use board::{Board, NUM_CELLS};
pub use board_error::BoardError;
pub use mark::Mark;
