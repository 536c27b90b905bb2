#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub const X_CHAR: char = 'X';
    pub const O_CHAR: char = 'O';
    pub const EMPTY_CHAR: char = 'I';

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            Self::X_CHAR => Some(Mark::X),
            Self::O_CHAR => Some(Mark::O),
            Self::EMPTY_CHAR => Some(Mark::Empty),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => Self::X_CHAR,
            Mark::O => Self::O_CHAR,
            Mark::Empty => Self::EMPTY_CHAR,
        }
    }

    /// One-hot triple in `(empty, x, o)` order.
    pub fn one_hot(self) -> [u8; 3] {
        match self {
            Mark::Empty => [1, 0, 0],
            Mark::X => [0, 1, 0],
            Mark::O => [0, 0, 1],
        }
    }
}
