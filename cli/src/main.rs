mod config;

use clap::Parser;
use engine::config::ConfigManager;
use engine::log;
use engine::logger;
use engine::session_rng::SessionRng;
use engine::tictactoe::{
    BOARD_CELLS, GameStatus, Mark, TicTacToeGameState, calculate_minimax_move, calculate_move,
};
use std::io::{self, Write};

use config::{Config, FirstPlayer};

#[derive(Parser)]
#[command(name = "tic_tac_toe_cli")]
struct Args {
    #[arg(long, default_value = "tic_tac_toe_config.yaml")]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    self_play: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager: ConfigManager<_, Config> = ConfigManager::from_yaml_file(&args.config);
    let config = manager.get_config()?;

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    if args.self_play {
        run_self_play();
    } else {
        run_interactive(&config, &mut rng)?;
    }

    Ok(())
}

fn run_interactive(config: &Config, rng: &mut SessionRng) -> Result<(), String> {
    let computer_mark = match config.first_player {
        FirstPlayer::Human => Mark::O,
        FirstPlayer::Computer => Mark::X,
        FirstPlayer::Random => {
            if rng.random_bool() {
                Mark::X
            } else {
                Mark::O
            }
        }
    };
    let bot_type = config.bot.to_bot_type();
    log!("Computer plays {}", computer_mark.as_char());

    let mut state = TicTacToeGameState::new();

    loop {
        if state.status == GameStatus::InProgress {
            render_board(&state);
        }

        match state.status {
            GameStatus::InProgress => {}
            GameStatus::Draw => {
                render_board(&state);
                println!("Game ended in a draw!");
                if !prompt_restart()? {
                    break;
                }
                state.reset();
                continue;
            }
            GameStatus::XWon | GameStatus::OWon => {
                render_board(&state);
                let winner = state.winner().map(|m| m.as_char()).unwrap_or(' ');
                if state.winner() == Some(computer_mark) {
                    println!("Computer ({}) has won!", winner);
                } else {
                    println!("Player {} has won!", winner);
                }
                if !prompt_restart()? {
                    break;
                }
                state.reset();
                continue;
            }
        }

        if state.current_mark == computer_mark {
            let Some(index) = calculate_move(bot_type, &state.board, computer_mark, rng) else {
                return Err("No move available for the computer".to_string());
            };
            log!("Computer plays cell {}", index);
            state.place_mark(index)?;
        } else {
            print!(
                "Your turn ({}). Enter cell index (0-8): ",
                state.current_mark.as_char()
            );
            io::stdout().flush().map_err(|e| e.to_string())?;

            let mut input = String::new();
            let bytes_read = io::stdin()
                .read_line(&mut input)
                .map_err(|e| e.to_string())?;
            if bytes_read == 0 {
                break;
            }

            let index: usize = match input.trim().parse() {
                Ok(index) if index < BOARD_CELLS => index,
                _ => {
                    println!("Enter a number between 0 and 8.");
                    continue;
                }
            };

            if let Err(e) = state.place_mark(index) {
                println!("{}", e);
                continue;
            }
        }
    }

    Ok(())
}

fn run_self_play() {
    let mut state = TicTacToeGameState::new();

    while state.status == GameStatus::InProgress {
        let Some(index) = calculate_minimax_move(&state.board, state.current_mark) else {
            break;
        };
        log!("{} plays cell {}", state.current_mark.as_char(), index);
        let _ = state.place_mark(index);
    }

    render_board(&state);
    match state.status {
        GameStatus::Draw => log!("Self-play ended in a draw"),
        GameStatus::XWon | GameStatus::OWon => {
            let winner = state.winner().map(|m| m.as_char()).unwrap_or(' ');
            log!("Self-play winner: {}", winner);
        }
        GameStatus::InProgress => log!("Self-play stopped without a result"),
    }
}

fn render_board(state: &TicTacToeGameState) {
    println!();
    for row in 0..3 {
        let base = row * 3;
        println!(
            " {} | {} | {} ",
            cell_char(state, base),
            cell_char(state, base + 1),
            cell_char(state, base + 2)
        );
        if row < 2 {
            println!("-----------");
        }
    }
    println!();
}

fn cell_char(state: &TicTacToeGameState, index: usize) -> char {
    match state.board.get(index) {
        Mark::Empty => char::from_digit(index as u32, 10).unwrap_or(' '),
        mark => mark.as_char(),
    }
}

fn prompt_restart() -> Result<bool, String> {
    print!("Play again? (y/n): ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes_read == 0 {
        return Ok(false);
    }

    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}
