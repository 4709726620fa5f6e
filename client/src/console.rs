use common::games::tictactoe::{BOARD_SIZE, Board, Position};

use crate::config::DisplayConfig;

pub const MOVE_PROMPT: &str = "Your move. Enter row (1-3) and column (1-3): ";

pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&mark| display.symbol(mark).to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    let mut out = rows.join("\n--+---+--\n");
    out.push('\n');
    out
}

/// Parses "row col" typed by the player, 1-indexed, into a board position.
pub fn parse_move(input: &str) -> Result<Position, String> {
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected a row and a column".to_string());
    };

    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Ok(Position::new(row - 1, col - 1))
}

fn parse_coordinate(text: &str) -> Result<usize, String> {
    let value: usize = text
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if !(1..=BOARD_SIZE).contains(&value) {
        return Err(format!("{} is outside 1-{}", value, BOARD_SIZE));
    }
    Ok(value)
}
