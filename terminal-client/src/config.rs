use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::{BotPolicy, GameMode, Mark, PlayerSettings, TicTacToeSettings};

pub const CONFIG_FILE: &str = "tictactoe_terminal_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum PolicyKind {
    Optimal,
    Random,
    Seeded,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub player_x: PlayerSettings,
    pub player_o: PlayerSettings,
    pub bot_policy: PolicyKind,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn to_settings(&self) -> TicTacToeSettings {
        let bot_policy = match (self.bot_policy, self.seed) {
            (PolicyKind::Optimal, _) => BotPolicy::Optimal,
            (PolicyKind::Random, _) | (PolicyKind::Seeded, None) => BotPolicy::Random,
            (PolicyKind::Seeded, Some(seed)) => BotPolicy::FixedSeededRandom(seed),
        };

        TicTacToeSettings {
            mode: self.mode,
            player_x: PlayerSettings::from_input(Mark::X, &self.player_x.name, &self.player_x.symbol),
            player_o: PlayerSettings::from_input(Mark::O, &self.player_o.name, &self.player_o.symbol),
            bot_policy,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_policy == PolicyKind::Seeded && self.seed.is_none() {
            return Err("seed is required for the seeded bot policy".to_string());
        }
        self.to_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = TicTacToeSettings::default();
        Self {
            mode: settings.mode,
            player_x: settings.player_x,
            player_o: settings.player_o,
            bot_policy: PolicyKind::Optimal,
            seed: None,
        }
    }
}
