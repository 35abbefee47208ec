use super::board::Board;
use super::types::{Mark, WIN_LINES, WinningLine};

pub fn is_win(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            continue;
        }
        if board.get(line[1]) == mark && board.get(line[2]) == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

/// Callers check wins first; a full board with a winning line is not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::BOARD_CELLS;

    #[test]
    fn test_every_win_line_is_detected_for_both_marks() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for index in line {
                    board.set(index, mark);
                }
                assert!(is_win(&board, mark), "line {:?} not detected", line);
                assert!(!is_win(&board, mark.opponent().unwrap()));
                assert_eq!(check_win(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_win_detected_with_other_cells_occupied() {
        let board = Board::from_symbols(["O", "O", "O", "X", "X", "", "", "X", ""]);
        assert!(is_win(&board, Mark::O));
        assert!(!is_win(&board, Mark::X));
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new();
        assert!(!is_win(&board, Mark::X));
        assert!(!is_win(&board, Mark::O));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_check_win_with_line_returns_the_triple() {
        let board = Board::from_symbols(["X", "O", "", "X", "O", "", "X", "", ""]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 3, 6]);
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let board = Board::from_symbols(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(check_win(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_partially_filled_board_is_not_a_draw() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        assert!(!is_draw(&board));
        for index in 1..BOARD_CELLS {
            assert_eq!(board.get(index), Mark::Empty);
        }
    }
}
