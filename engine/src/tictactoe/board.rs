use super::types::{BOARD_CELLS, Mark};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    #[cfg(test)]
    pub fn from_symbols(symbols: [&str; BOARD_CELLS]) -> Self {
        let mut board = Self::new();
        for (index, symbol) in symbols.iter().enumerate() {
            board.cells[index] = match *symbol {
                "X" => Mark::X,
                "O" => Mark::O,
                _ => Mark::Empty,
            };
        }
        board
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; BOARD_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_nine_available_moves() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..BOARD_CELLS).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_ascending_empty_indices() {
        let board = Board::from_symbols(["X", "", "O", "", "X", "", "", "O", ""]);
        assert_eq!(board.available_moves(), vec![1, 3, 5, 6, 8]);
    }

    #[test]
    fn test_full_board_has_no_available_moves() {
        let board = Board::from_symbols(["X", "O", "X", "O", "X", "O", "X", "O", "X"]);
        assert!(board.available_moves().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board = Board::from_symbols(["X", "O", "", "", "", "", "", "", ""]);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut board = Board::new();
        board.set(4, Mark::O);
        assert_eq!(board.get(4), Mark::O);
        assert_eq!(board.get(0), Mark::Empty);
    }
}
