use crate::log;
use super::board::{Board, get_available_moves, is_full, line_winner};
use super::types::{Mark, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// A mark placed on a working board for the duration of one search branch.
/// The cell goes back to `Mark::Empty` when the guard is dropped.
struct HypotheticalMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> HypotheticalMove<'a> {
    fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        *board.cell_mut(position) = mark;
        Self { board, position }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        *self.board.cell_mut(self.position) = Mark::Empty;
    }
}

/// Minimax score of `board` from the computer's point of view.
///
/// `maximizing` is true when the computer is the side to move. Terminal
/// boards score [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`]; anything else
/// is searched to full depth with no discounting.
pub fn evaluate(board: &Board, maximizing: bool) -> i32 {
    let mut working = board.clone();
    minimax(&mut working, maximizing)
}

/// Picks the computer's move.
///
/// Empty cells are scored in row-major order and the first cell with the
/// strictly highest score wins, so among equally good moves the one nearest
/// the top-left corner is always chosen. Returns `None` when the board has no
/// empty cell.
pub fn find_best_move(board: &Board) -> Option<Position> {
    let mut working = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(board) {
        let score = {
            let mut hypothetical = HypotheticalMove::place(&mut working, position, Mark::Computer);
            minimax(hypothetical.board(), false)
        };

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    match best_move {
        Some(position) => log!("Minimax picked {} with score {}", position, best_score),
        None => log!("Minimax called on a board with no empty cells"),
    }

    best_move
}

fn terminal_score(board: &Board) -> Option<i32> {
    match line_winner(board) {
        Mark::Computer => Some(WIN_SCORE),
        Mark::Player => Some(LOSS_SCORE),
        Mark::Empty if is_full(board) => Some(DRAW_SCORE),
        Mark::Empty => None,
    }
}

fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mark = if is_maximizing { Mark::Computer } else { Mark::Player };

    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    for position in get_available_moves(board) {
        let mut hypothetical = HypotheticalMove::place(board, position, mark);
        let score = minimax(hypothetical.board(), !is_maximizing);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{game_result, is_terminal};
    use crate::games::tictactoe::types::GameResult;

    const E: Mark = Mark::Empty;
    const P: Mark = Mark::Player;
    const C: Mark = Mark::Computer;

    fn board_with(players: &[(usize, usize)], computers: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in players {
            board.set(Position::new(row, col), P).unwrap();
        }
        for &(row, col) in computers {
            board.set(Position::new(row, col), C).unwrap();
        }
        board
    }

    /// Best reply for the human side: lowest score, first seen wins ties.
    fn find_best_player_move(board: &Board) -> Option<Position> {
        let mut best_move = None;
        let mut best_score = i32::MAX;
        for position in get_available_moves(board) {
            let mut next = board.clone();
            next.set(position, P).unwrap();
            let score = evaluate(&next, true);
            if score < best_score {
                best_score = score;
                best_move = Some(position);
            }
        }
        best_move
    }

    #[test]
    fn test_evaluate_terminal_scores() {
        #[rustfmt::skip]
        let computer_won = Board::from_cells([
            [C, C, C],
            [P, P, E],
            [P, E, E],
        ]);
        #[rustfmt::skip]
        let player_won = Board::from_cells([
            [P, C, C],
            [P, E, E],
            [P, E, E],
        ]);
        #[rustfmt::skip]
        let draw = Board::from_cells([
            [P, C, P],
            [P, C, C],
            [C, P, P],
        ]);

        for maximizing in [true, false] {
            assert_eq!(evaluate(&computer_won, maximizing), 10);
            assert_eq!(evaluate(&player_won, maximizing), -10);
            assert_eq!(evaluate(&draw, maximizing), 0);
        }
    }

    #[test]
    fn test_evaluate_empty_board_is_draw() {
        assert_eq!(evaluate(&Board::new(), false), 0);
    }

    #[test]
    fn test_evaluate_one_move_from_loss() {
        // Player to move with an open line: the computer cannot avoid losing.
        let board = board_with(&[(0, 0), (0, 1), (2, 2)], &[(1, 1), (2, 0)]);

        assert_eq!(evaluate(&board, false), -10);
    }

    #[test]
    fn test_empty_board_reply_is_corner_or_center() {
        let corners_and_center = [
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(2, 2),
            Position::new(1, 1),
        ];

        let position = find_best_move(&Board::new()).unwrap();

        assert!(corners_and_center.contains(&position), "{}", position);
        assert_eq!(position, Position::new(0, 0));
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        let board = board_with(&[(0, 0)], &[]);

        assert_eq!(find_best_move(&board), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_corner_reply_to_center_opening() {
        let board = board_with(&[(1, 1)], &[]);

        assert_eq!(find_best_move(&board), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_blocks_immediate_threat_in_row() {
        let board = board_with(&[(0, 0), (0, 1)], &[(1, 1)]);

        assert_eq!(find_best_move(&board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_blocks_open_row_on_otherwise_empty_board() {
        let board = board_with(&[(0, 0), (0, 1)], &[]);

        assert_eq!(find_best_move(&board), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_blocks_immediate_threat_later_in_scan_order() {
        let board = board_with(&[(0, 0), (1, 0)], &[(1, 1)]);

        assert_eq!(find_best_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_takes_win_over_block() {
        // Player threatens (0, 2), which comes first in scan order.
        let board = board_with(&[(0, 0), (0, 1), (1, 2)], &[(2, 1), (2, 2)]);

        assert_eq!(find_best_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_find_best_move_on_full_board_returns_none() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [P, C, P],
            [P, C, C],
            [C, P, P],
        ]);

        assert_eq!(find_best_move(&board), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [P, C, P],
            [P, C, C],
            [C, P, E],
        ]);

        assert_eq!(find_best_move(&board), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = board_with(&[(0, 0), (2, 2)], &[(1, 1)]);
        let snapshot = board.clone();

        let _ = find_best_move(&board);
        let _ = evaluate(&board, true);
        let _ = evaluate(&board, false);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_hypothetical_move_restores_cell_on_drop() {
        let mut board = board_with(&[(0, 0)], &[]);
        let snapshot = board.clone();

        {
            let mut hypothetical = HypotheticalMove::place(&mut board, Position::new(1, 1), C);
            assert_eq!(hypothetical.board().get(Position::new(1, 1)), Some(C));
        }

        assert_eq!(board, snapshot);
        assert_eq!(board.get(Position::new(1, 1)), Some(E));
    }

    #[test]
    fn test_perfect_play_from_empty_board_is_draw() {
        let mut board = Board::new();
        let mut mark = P;

        while !is_terminal(&board) {
            let position = match mark {
                P => find_best_player_move(&board),
                _ => find_best_move(&board),
            }
            .unwrap();
            board.set(position, mark).unwrap();
            mark = mark.opponent().unwrap();
        }

        assert_eq!(game_result(&board), GameResult::Draw);
    }

    #[test]
    fn test_computer_never_loses_against_any_player_line() {
        fn explore(board: &mut Board) {
            if is_terminal(board) {
                assert_ne!(game_result(board), GameResult::PlayerWins, "{:?}", board);
                return;
            }
            for position in get_available_moves(board) {
                board.set(position, P).unwrap();
                if !is_terminal(board) {
                    let reply = find_best_move(board).unwrap();
                    board.set(reply, C).unwrap();
                    explore(board);
                    board.set(reply, E).unwrap();
                } else {
                    explore(board);
                }
                board.set(position, E).unwrap();
            }
        }

        explore(&mut Board::new());
    }
}
