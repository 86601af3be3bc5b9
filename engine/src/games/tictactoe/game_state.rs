use crate::log;
use super::board::Board;
use super::bot_controller::BotController;
use super::invalid_move::InvalidMove;
use super::settings::{GameMode, PlayerSettings, TicTacToeSettings};
use super::types::{GamePhase, GameResult, Mark};
use super::win_detector::game_result;

/// Everything an adapter needs to keep between inputs. The engine functions
/// themselves are stateless; this value is owned by whoever drives the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_turn: Mark,
    game_over: bool,
    result_message: Option<String>,
    mode: GameMode,
    player_x: PlayerSettings,
    player_o: PlayerSettings,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSettings) -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            game_over: false,
            result_message: None,
            mode: settings.mode,
            player_x: settings.player_x.clone(),
            player_o: settings.player_o.clone(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn player(&self, mark: Mark) -> &PlayerSettings {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    pub fn result(&self) -> GameResult {
        game_result(&self.board)
    }

    pub fn phase(&self) -> GamePhase {
        if self.board.is_blank() {
            return GamePhase::NotStarted;
        }
        GamePhase::from(self.result())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayer && self.current_turn == Mark::O && !self.game_over
    }

    /// Places the current mover's mark. On error nothing changes.
    pub fn place_mark(&mut self, index: usize) -> Result<GameResult, InvalidMove> {
        if self.game_over {
            return Err(InvalidMove::GameOver);
        }

        let mark = self.current_turn;
        self.board.apply_move(index, mark)?;
        self.last_move = Some(index);
        log!("{} placed {} at cell {}", self.player(mark).name, mark, index);

        let result = self.result();
        match result {
            GameResult::InProgress => self.current_turn = mark.opponent(),
            GameResult::Win(_) | GameResult::Draw => self.finish(result),
        }
        Ok(result)
    }

    /// Lets the bot answer in single-player mode. Returns the cell it played.
    pub fn play_bot_turn(&mut self, bot: &mut BotController) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }
        let index = bot.choose_move(&self.board)?;
        self.place_mark(index).ok().map(|_| index)
    }

    /// New game with the same mode and players.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::X;
        self.game_over = false;
        self.result_message = None;
        self.last_move = None;
        log!("Game reset");
    }

    fn finish(&mut self, result: GameResult) {
        self.game_over = true;
        let message = self.compose_result_message(result);
        log!("Game over: {}", message.replace('\n', " "));
        self.result_message = Some(message);
    }

    fn compose_result_message(&self, result: GameResult) -> String {
        match (self.mode, result) {
            (GameMode::SinglePlayer, GameResult::Win(Mark::X)) => {
                format!("🎉 {} WINS! Congratulations!", self.player_x.name)
            }
            (GameMode::SinglePlayer, GameResult::Win(Mark::O)) => {
                "😢 You lost! Better luck next time!".to_string()
            }
            (GameMode::SinglePlayer, _) => "🤝 It's a tie! Well played!".to_string(),
            (GameMode::TwoPlayers, GameResult::Win(winner)) => {
                let loser = winner.opponent();
                format!(
                    "🎉 OMG, {} won! Congratulaaaaaations!!!\n😢 Aww, too bad. {} lost. Better luck next time <3",
                    self.player(winner).name,
                    self.player(loser).name
                )
            }
            (GameMode::TwoPlayers, _) => "🤝 It's a tie! Great game!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::bot_controller::BotPolicy;

    fn single_player() -> TicTacToeGameState {
        TicTacToeGameState::new(&TicTacToeSettings::default())
    }

    fn two_players() -> TicTacToeGameState {
        TicTacToeGameState::new(&TicTacToeSettings {
            mode: GameMode::TwoPlayers,
            player_x: PlayerSettings::new("Ann", "A"),
            player_o: PlayerSettings::new("Bob", "B"),
            ..TicTacToeSettings::default()
        })
    }

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_new_state_is_not_started() {
        let state = single_player();
        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert_eq!(state.current_turn(), Mark::X);
        assert!(!state.is_game_over());
        assert_eq!(state.result_message(), None);
    }

    #[test]
    fn test_turns_alternate_in_two_player_mode() {
        let mut state = two_players();
        state.place_mark(0).unwrap();
        assert_eq!(state.current_turn(), Mark::O);
        assert_eq!(state.phase(), GamePhase::InProgress);
        state.place_mark(4).unwrap();
        assert_eq!(state.current_turn(), Mark::X);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut state = two_players();
        state.place_mark(0).unwrap();
        let before = state.clone();
        assert_eq!(state.place_mark(0), Err(InvalidMove::Occupied(0)));
        assert_eq!(state.place_mark(12), Err(InvalidMove::OutOfRange(12)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_two_player_win_message_names_winner_and_loser() {
        let mut state = two_players();
        play(&mut state, &[0, 3, 1, 4]);
        assert_eq!(state.place_mark(2), Ok(GameResult::Win(Mark::X)));
        assert!(state.is_game_over());
        assert_eq!(state.phase(), GamePhase::Won(Mark::X));
        let message = state.result_message().unwrap();
        assert!(message.contains("OMG, Ann won!"));
        assert!(message.contains("Bob lost"));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = two_players();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.clone();
        assert_eq!(state.place_mark(8), Err(InvalidMove::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_message() {
        let mut state = two_players();
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(state.place_mark(8), Ok(GameResult::Draw));
        assert_eq!(state.phase(), GamePhase::Draw);
        assert_eq!(state.result_message(), Some("🤝 It's a tie! Great game!"));
    }

    #[test]
    fn test_bot_answers_in_single_player_mode() {
        let mut state = single_player();
        let mut bot = BotController::new(BotPolicy::Optimal);
        assert_eq!(state.play_bot_turn(&mut bot), None);

        state.place_mark(0).unwrap();
        assert!(state.is_bot_turn());
        let index = state.play_bot_turn(&mut bot).unwrap();
        assert_eq!(state.board().get(index), Some(Some(Mark::O)));
        assert_eq!(state.current_turn(), Mark::X);
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_bot_never_plays_in_two_player_mode() {
        let mut state = two_players();
        let mut bot = BotController::new(BotPolicy::Optimal);
        state.place_mark(0).unwrap();
        assert_eq!(state.play_bot_turn(&mut bot), None);
        assert_eq!(state.board().count(Mark::O), 0);
    }

    #[test]
    fn test_optimal_bot_punishes_careless_human() {
        let mut state = single_player();
        let mut bot = BotController::new(BotPolicy::Optimal);
        // Human ignores every threat and fills the top-left area.
        for index in [0, 1, 3, 5, 7] {
            if state.is_game_over() {
                break;
            }
            if state.place_mark(index).is_err() {
                continue;
            }
            state.play_bot_turn(&mut bot);
        }
        assert!(state.is_game_over());
        assert_eq!(state.phase(), GamePhase::Won(Mark::O));
        assert_eq!(state.last_move(), Some(6));
    }

    #[test]
    fn test_single_player_loss_message() {
        let mut state = single_player();
        // X: 0, 1, 8  O: 3, 4, 5
        state.place_mark(0).unwrap();
        state.place_mark(3).unwrap();
        state.place_mark(1).unwrap();
        state.place_mark(4).unwrap();
        state.place_mark(8).unwrap();
        assert_eq!(state.place_mark(5), Ok(GameResult::Win(Mark::O)));
        assert_eq!(state.result_message(), Some("😢 You lost! Better luck next time!"));
    }

    #[test]
    fn test_reset_keeps_mode_and_players() {
        let mut state = two_players();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert_eq!(state.current_turn(), Mark::X);
        assert!(!state.is_game_over());
        assert_eq!(state.result_message(), None);
        assert_eq!(state.mode(), GameMode::TwoPlayers);
        assert_eq!(state.player(Mark::O).name, "Bob");
    }
}
