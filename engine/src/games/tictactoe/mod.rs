mod board;
mod bot_controller;
mod game_state;
mod invalid_move;
mod minimax;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotController, BotPolicy, calculate_random_move};
pub use game_state::TicTacToeGameState;
pub use invalid_move::InvalidMove;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, best_move, minimax, scored_moves};
pub use settings::{
    DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_O_SYMBOL, DEFAULT_PLAYER_X_NAME,
    DEFAULT_PLAYER_X_SYMBOL, GameMode, MAX_SYMBOL_CHARS, PlayerSettings, TicTacToeSettings,
};
pub use types::{
    BOARD_SIDE, CELL_COUNT, Cell, GamePhase, GameResult, Mark, Position, WIN_LINES, WinLine,
};
pub use win_detector::{game_result, is_draw, is_terminal, is_winner, winning_line};
