use std::io::{BufRead, Write};

use common::games::tictactoe::{GameResult, Mark, TicTacToeGameState};
use common::log;

use crate::config::DisplayConfig;
use crate::console::{MOVE_PROMPT, parse_move, render_board};

fn write_board<W: Write>(
    output: &mut W,
    state: &TicTacToeGameState,
    display: &DisplayConfig,
) -> Result<(), String> {
    write!(output, "\n{}\n", render_board(&state.board, display))
        .map_err(|e| format!("Failed to write board: {}", e))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Err("Input ended before the game finished".to_string());
    }
    Ok(line)
}

fn final_message(result: GameResult) -> &'static str {
    match result {
        GameResult::PlayerWins => "Congratulations! You won!",
        GameResult::ComputerWins => "The computer won.",
        GameResult::Draw => "The game ended in a draw!",
        GameResult::InProgress => "The game is still in progress.",
    }
}

/// Plays one game: the human moves first, the computer answers with minimax.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
) -> Result<GameResult, String> {
    let mut state = TicTacToeGameState::new();
    log!("Game started");

    loop {
        write_board(output, &state, display)?;

        match state.current_mark {
            Mark::Computer => {
                writeln!(output, "Computer's move:").map_err(|e| e.to_string())?;
                state.apply_computer_move()?;
            }
            _ => {
                write!(output, "{}", MOVE_PROMPT).map_err(|e| e.to_string())?;
                output.flush().map_err(|e| e.to_string())?;

                let line = read_line(input)?;
                let placed = parse_move(&line)
                    .and_then(|position| state.place_mark(Mark::Player, position));
                if let Err(reason) = placed {
                    writeln!(output, "Invalid move. Try again. ({})", reason)
                        .map_err(|e| e.to_string())?;
                    continue;
                }
            }
        }

        if state.status.is_over() {
            write_board(output, &state, display)?;
            writeln!(output, "{}", final_message(state.status)).map_err(|e| e.to_string())?;
            log!("Game over after {} moves: {}", state.move_count, state.status);
            return Ok(state.status);
        }
    }
}
