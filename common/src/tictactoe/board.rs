use std::fmt;
use std::str::FromStr;

use super::{BoardError, Mark};

pub const NUM_CELLS: usize = 9;

/// A 3x3 board in row-major order, as carried on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; NUM_CELLS],
}

impl Board {
    pub fn new(cells: [Mark; NUM_CELLS]) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self::new([Mark::Empty; NUM_CELLS])
    }

    /// Parses the 9-character wire form. Length is checked before the alphabet.
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let length = input.chars().count();
        if length != NUM_CELLS {
            return Err(BoardError::InvalidLength { length });
        }

        let mut cells = [Mark::Empty; NUM_CELLS];
        for (position, character) in input.chars().enumerate() {
            cells[position] = Mark::from_char(character)
                .ok_or(BoardError::InvalidCharacter { character, position })?;
        }

        Ok(Self { cells })
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X always moves first, so the counts decide whose turn it is.
    pub fn whose_turn(&self) -> Result<Mark, BoardError> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);

        if x_count == o_count {
            Ok(Mark::X)
        } else if x_count == o_count + 1 {
            Ok(Mark::O)
        } else {
            Err(BoardError::InvalidTurnState { x_count, o_count })
        }
    }

    pub fn first_empty_cell(&self) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == Mark::Empty)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
    }

    pub fn one_hot_values(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|cell| cell.one_hot()).collect()
    }

    /// Comma-joined one-hot vector, the query format of the prediction service.
    pub fn one_hot_string(&self) -> String {
        self.one_hot_values()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_through_display() {
        let board = Board::parse("XIIIOIOOX").unwrap();

        assert_eq!(board.to_string(), "XIIIOIOOX");
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.get(1), Some(Mark::Empty));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(Board::parse("XIIO"), Err(BoardError::InvalidLength { length: 4 }));
        assert_eq!(
            Board::parse("IIIIIIIIII"),
            Err(BoardError::InvalidLength { length: 10 })
        );
        assert_eq!(Board::parse(""), Err(BoardError::InvalidLength { length: 0 }));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert_eq!(
            Board::parse("XIIZIIIII"),
            Err(BoardError::InvalidCharacter { character: 'Z', position: 3 })
        );
        // lowercase marks are not part of the alphabet
        assert!(matches!(
            Board::parse("xIIIIIIII"),
            Err(BoardError::InvalidCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn test_whose_turn_x_when_counts_equal() {
        assert_eq!(Board::empty().whose_turn(), Ok(Mark::X));
        assert_eq!(Board::parse("XOIIIIIII").unwrap().whose_turn(), Ok(Mark::X));
    }

    #[test]
    fn test_whose_turn_o_when_x_leads_by_one() {
        assert_eq!(Board::parse("XIIIIIIII").unwrap().whose_turn(), Ok(Mark::O));
        assert_eq!(Board::parse("XOXIIIIII").unwrap().whose_turn(), Ok(Mark::O));
    }

    #[test]
    fn test_whose_turn_invalid_when_o_leads() {
        let board = Board::parse("XIIIOIOOX").unwrap();

        assert_eq!(
            board.whose_turn(),
            Err(BoardError::InvalidTurnState { x_count: 2, o_count: 3 })
        );
    }

    #[test]
    fn test_whose_turn_invalid_when_x_leads_by_two() {
        let board = Board::parse("XXIIIIIII").unwrap();

        assert_eq!(
            board.whose_turn(),
            Err(BoardError::InvalidTurnState { x_count: 2, o_count: 0 })
        );
    }

    #[test]
    fn test_first_empty_cell_scans_left_to_right() {
        assert_eq!(Board::parse("XOXIOIIII").unwrap().first_empty_cell(), Some(3));
        assert_eq!(Board::empty().first_empty_cell(), Some(0));
        assert_eq!(Board::parse("XOXOXOOXO").unwrap().first_empty_cell(), None);
    }

    #[test]
    fn test_one_hot_encoding_preserves_order() {
        let board = Board::parse("IXOIIIIII").unwrap();
        let values = board.one_hot_values();

        assert_eq!(values.len(), 27);
        assert_eq!(&values[..9], &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert!(values[9..].chunks(3).all(|chunk| chunk == [1, 0, 0]));
    }

    #[test]
    fn test_one_hot_string_is_comma_joined() {
        let board = Board::parse("XOIIIIIII").unwrap();

        assert_eq!(
            board.one_hot_string(),
            "0,1,0,0,0,1,1,0,0,1,0,0,1,0,0,1,0,0,1,0,0,1,0,0,1,0,0"
        );
    }

    #[test]
    fn test_place_and_empty_cells() {
        let mut board = Board::parse("XIIIIIIIO").unwrap();
        board.place(4, Mark::O);

        assert!(!board.is_empty_at(4));
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(board.count(Mark::O), 2);
    }
}
