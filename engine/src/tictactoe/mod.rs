mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{calculate_minimax_move, calculate_move, calculate_random_move};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_CELLS, BotType, GameStatus, Mark, WIN_LINES, WinningLine};
pub use win_detector::{check_win, check_win_with_line, is_draw, is_win};
