mod board;
mod bot_controller;
mod game_state;
mod types;

pub use board::{
    Board, LINES, game_result, get_available_moves, has_valid_mark_counts, is_full, is_terminal,
    line_winner,
};
pub use bot_controller::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, evaluate, find_best_move};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, GameResult, Mark, Position};
