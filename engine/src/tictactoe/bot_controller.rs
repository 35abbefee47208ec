use crate::session_rng::SessionRng;

use super::board::Board;
use super::types::{BOARD_CELLS, BotType, Mark};
use super::win_detector::is_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => calculate_minimax_move(board, bot_mark),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let mut scratch = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        scratch.set(index, bot_mark);
        let score = minimax(&mut scratch, bot_mark, opponent_mark, false);
        scratch.set(index, Mark::Empty);

        // Strictly greater keeps the first of equally scored moves.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(board: &mut Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    if is_win(board, bot_mark) {
        return WIN_SCORE;
    }
    if is_win(board, opponent_mark) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board.get(index) != Mark::Empty {
                continue;
            }
            board.set(index, bot_mark);
            let score = minimax(board, bot_mark, opponent_mark, false);
            board.set(index, Mark::Empty);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board.get(index) != Mark::Empty {
                continue;
            }
            board.set(index, opponent_mark);
            let score = minimax(board, bot_mark, opponent_mark, true);
            board.set(index, Mark::Empty);
            best_score = best_score.min(score);
        }
        best_score
    }
}
