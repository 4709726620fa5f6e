use common::config::Validate;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub player_symbol: char,
    pub computer_symbol: char,
    pub empty_symbol: char,
}

impl DisplayConfig {
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => self.empty_symbol,
            Mark::Player => self.player_symbol,
            Mark::Computer => self.computer_symbol,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, symbol) in [
            ("player_symbol", self.player_symbol),
            ("computer_symbol", self.computer_symbol),
        ] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(format!("{} must be a visible character", name));
            }
        }
        if self.empty_symbol.is_control() {
            return Err("empty_symbol must not be a control character".to_string());
        }
        if self.player_symbol == self.computer_symbol
            || self.player_symbol == self.empty_symbol
            || self.computer_symbol == self.empty_symbol
        {
            return Err("player, computer and empty symbols must be distinct".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            player_symbol: 'X',
            computer_symbol: 'O',
            empty_symbol: ' ',
        }
    }
}
