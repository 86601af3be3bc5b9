use serde::{Deserialize, Serialize};

use super::bot_controller::BotPolicy;
use super::types::Mark;

pub const DEFAULT_PLAYER_X_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player 2";
pub const DEFAULT_PLAYER_X_SYMBOL: &str = "❌";
pub const DEFAULT_PLAYER_O_SYMBOL: &str = "⭕";
pub const MAX_SYMBOL_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human plays `X`, the bot answers with `O`.
    SinglePlayer,
    /// Hot seat, both marks are human.
    TwoPlayers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub name: String,
    pub symbol: String,
}

impl PlayerSettings {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    pub fn default_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::new(DEFAULT_PLAYER_X_NAME, DEFAULT_PLAYER_X_SYMBOL),
            Mark::O => Self::new(DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_O_SYMBOL),
        }
    }

    /// Blank inputs fall back to the defaults for `mark`.
    pub fn from_input(mark: Mark, name: &str, symbol: &str) -> Self {
        let defaults = Self::default_for(mark);
        let name = name.trim();
        let symbol = symbol.trim();
        Self {
            name: if name.is_empty() { defaults.name } else { name.to_string() },
            symbol: if symbol.is_empty() { defaults.symbol } else { symbol.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    pub player_x: PlayerSettings,
    pub player_o: PlayerSettings,
    pub bot_policy: BotPolicy,
}

impl TicTacToeSettings {
    pub fn player(&self, mark: Mark) -> &PlayerSettings {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            player_x: PlayerSettings::default_for(Mark::X),
            player_o: PlayerSettings::default_for(Mark::O),
            bot_policy: BotPolicy::Optimal,
        }
    }
}
