use crate::log;
use super::board::{Board, game_result, has_valid_mark_counts};
use super::bot_controller::find_best_move;
use super::types::{GameResult, Mark, Position};

/// One game between the human and the computer. The human always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameResult,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::Player,
            status: GameResult::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, position: Position) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not the turn of {:?}", mark));
        }

        if !position.is_on_board() {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(position) != Some(Mark::Empty) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(position, mark)?;
        debug_assert!(has_valid_mark_counts(&self.board));
        self.last_move = Some(position);
        self.move_count += 1;
        self.status = game_result(&self.board);

        log!("{:?} placed at {}, status: {}", mark, position, self.status);

        if !self.status.is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn apply_computer_move(&mut self) -> Result<Position, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != Mark::Computer {
            return Err("Not the computer's turn".to_string());
        }

        let position = find_best_move(&self.board)
            .ok_or_else(|| "No empty cell left for the computer".to_string())?;
        self.place_mark(Mark::Computer, position)?;
        Ok(position)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
