use super::types::{BOARD_SIZE, GameResult, Mark, Position};

/// The 8 lines that win when uniformly occupied: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub fn set(&mut self, position: Position, mark: Mark) -> Result<(), String> {
        let cell = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
            .ok_or_else(|| format!("Position {} is out of bounds", position))?;
        *cell = mark;
        Ok(())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> &mut Mark {
        &mut self.cells[position.row][position.col]
    }
}

pub fn line_winner(board: &Board) -> Mark {
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = board.cells[r0][c0];
        if mark != Mark::Empty && board.cells[r1][c1] == mark && board.cells[r2][c2] == mark {
            return mark;
        }
    }
    Mark::Empty
}

pub fn is_full(board: &Board) -> bool {
    board
        .cells
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn is_terminal(board: &Board) -> bool {
    line_winner(board) != Mark::Empty || is_full(board)
}

pub fn game_result(board: &Board) -> GameResult {
    match line_winner(board) {
        Mark::Player => GameResult::PlayerWins,
        Mark::Computer => GameResult::ComputerWins,
        Mark::Empty if is_full(board) => GameResult::Draw,
        Mark::Empty => GameResult::InProgress,
    }
}

/// The human moves first, so in any reachable board the player has as many
/// marks as the computer, or one more.
pub fn has_valid_mark_counts(board: &Board) -> bool {
    let players = board.count(Mark::Player);
    let computers = board.count(Mark::Computer);
    players == computers || players == computers + 1
}

/// Empty cells in row-major order, top-left to bottom-right.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}
