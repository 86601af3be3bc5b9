use crate::config::Validate;
use super::settings::{MAX_SYMBOL_CHARS, PlayerSettings, TicTacToeSettings};

impl Validate for PlayerSettings {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.symbol.trim().is_empty() {
            return Err(format!("Symbol of {} must not be empty", self.name));
        }
        let symbol_len = self.symbol.chars().count();
        if symbol_len > MAX_SYMBOL_CHARS {
            return Err(format!(
                "Symbol of {} is {} chars long, at most {} allowed",
                self.name, symbol_len, MAX_SYMBOL_CHARS
            ));
        }
        Ok(())
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        self.player_x.validate()?;
        self.player_o.validate()?;
        if self.player_x.symbol == self.player_o.symbol {
            return Err(format!(
                "Players must use different symbols, both use {}",
                self.player_x.symbol
            ));
        }
        Ok(())
    }
}
