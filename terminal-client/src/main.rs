mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{BotController, GameMode, TicTacToeGameState};
use tictactoe_engine::log;
use tictactoe_engine::logger::{self, LogTarget};

use config::{GameConfig, PolicyKind};
use runner::TerminalRunner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::SinglePlayer,
            ModeArg::Two => GameMode::TwoPlayers,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_terminal", about = "Tic-Tac-Toe in the terminal")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    policy: Option<PolicyKind>,

    /// Seed for the seeded bot policy. Implies `--policy seeded` when no policy is given.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, game: &mut GameConfig) {
        if let Some(mode) = self.mode {
            game.mode = mode.into();
        }
        if let Some(seed) = self.seed {
            game.seed = Some(seed);
            if self.policy.is_none() {
                game.bot_policy = PolicyKind::Seeded;
            }
        }
        if let Some(policy) = self.policy {
            game.bot_policy = policy;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = config::get_config_manager(&args.config);
    let mut cfg = manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some(cfg.log_prefix.clone().unwrap_or_else(|| "Terminal".to_string()))
    } else {
        cfg.log_prefix.clone()
    };
    logger::init_logger(prefix, LogTarget::Stderr);

    args.apply_to(&mut cfg.game);
    cfg.validate()?;

    if args.save_config {
        manager.set_config(&cfg)?;
        log!("Config saved to {}", args.config.display());
    }

    let settings = cfg.game.to_settings();
    let bot = BotController::new(settings.bot_policy);
    log!(
        "Starting {:?} game, bot policy {:?}, seed {}",
        settings.mode,
        settings.bot_policy,
        bot.seed()
    );

    let state = TicTacToeGameState::new(&settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut runner = TerminalRunner::new(stdin.lock(), stdout.lock(), state, bot);
    runner.run()?;

    log!("Leaving after game in phase {:?}", runner.state().phase());
    Ok(())
}
