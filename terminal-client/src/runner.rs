use std::io::{self, BufRead, Write};

use tictactoe_engine::games::tictactoe::{
    BotController, CELL_COUNT, InvalidMove, Mark, TicTacToeGameState,
};
use tictactoe_engine::log;

use crate::render::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    Quit,
}

/// Cell numbers are 1-based on screen and converted to board indices here.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(Command::Place(number - 1)),
        Ok(_) => Err(format!("Cell numbers go from 1 to {}", CELL_COUNT)),
        Err(_) => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn describe_invalid_move(err: InvalidMove) -> String {
    match err {
        InvalidMove::OutOfRange(_) => format!("Cell numbers go from 1 to {}", CELL_COUNT),
        InvalidMove::Occupied(index) => format!("Cell {} is already taken", index + 1),
        InvalidMove::GameOver => "The game is over".to_string(),
    }
}

pub struct TerminalRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    state: TicTacToeGameState,
    bot: BotController,
}

impl<R: BufRead, W: Write> TerminalRunner<R, W> {
    pub fn new(input: R, output: W, state: TicTacToeGameState, bot: BotController) -> Self {
        Self {
            input,
            output,
            state,
            bot,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Runs games until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.state.is_bot_turn() {
                if let Some(index) = self.state.play_bot_turn(&mut self.bot) {
                    let name = &self.state.player(Mark::O).name;
                    writeln!(self.output, "{} plays {}", name, index + 1)?;
                    continue;
                }
                log!("Bot had no move on a non-terminal board");
                return Ok(());
            }

            writeln!(self.output, "\n{}\n", render_board(&self.state))?;

            if self.state.is_game_over() {
                if let Some(message) = self.state.result_message() {
                    writeln!(self.output, "{}", message)?;
                }
                write!(self.output, "Play again? [y/N]: ")?;
                self.output.flush()?;

                match self.read_line()? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        self.state.reset();
                        writeln!(self.output, "New game started")?;
                        continue;
                    }
                    _ => return Ok(()),
                }
            }

            let player = self.state.player(self.state.current_turn());
            write!(
                self.output,
                "{} ({}), pick a cell 1-{} (r = reset, q = quit): ",
                player.name, player.symbol, CELL_COUNT
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Reset) => {
                    self.state.reset();
                    writeln!(self.output, "New game started")?;
                }
                Ok(Command::Place(index)) => {
                    if let Err(err) = self.state.place_mark(index) {
                        writeln!(self.output, "{}", describe_invalid_move(err))?;
                    }
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }
}
