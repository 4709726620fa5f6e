use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Player),
            Mark::Empty => None,
        }
    }
}

/// Zero-indexed cell coordinate. The console layer converts from 1-indexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        *self != GameResult::InProgress
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::InProgress => "in progress",
            GameResult::PlayerWins => "player wins",
            GameResult::ComputerWins => "computer wins",
            GameResult::Draw => "draw",
        };
        f.write_str(text)
    }
}
