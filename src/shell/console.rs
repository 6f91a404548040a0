//! Line-oriented console front end.
//!
//! Generic over its reader and writer so whole games can be scripted in
//! tests. All retry and re-prompt policy lives here; the engine only
//! answers yes or no.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info, warn};

use super::render::render_board;
use super::ShellError;
use crate::core::{Board, GameConfig, Position, MAX_PLAYERS, MIN_PLAYERS};
use crate::game::GameEngine;
use crate::rules::GameStatus;

/// Console collaborator driving a [`GameEngine`].
pub struct ConsoleShell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the shell, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Fill in whatever the command line left out by asking.
    ///
    /// Asks about the computer first, then the player count.
    pub fn configure(
        &mut self,
        player_count: Option<usize>,
        cpu_mode: Option<bool>,
    ) -> Result<GameConfig, ShellError> {
        let cpu_mode = match cpu_mode {
            Some(cpu) => cpu,
            None => self.prompt_cpu_mode()?,
        };
        let player_count = match player_count {
            Some(count) => count,
            None => self.prompt_player_count()?,
        };
        Ok(GameConfig::new(player_count, cpu_mode))
    }

    /// Ask whether to play against the computer. Only `y` means yes.
    pub fn prompt_cpu_mode(&mut self) -> Result<bool, ShellError> {
        let answer = self.read_line("Do you want to play against the computer? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Ask for the player count until a supported one is given.
    pub fn prompt_player_count(&mut self) -> Result<usize, ShellError> {
        loop {
            let answer = self.read_line(&format!(
                "Enter number of players ({MIN_PLAYERS} to {MAX_PLAYERS}): "
            ))?;
            match answer.parse::<i64>() {
                Ok(n) => match usize::try_from(n) {
                    Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => {
                        return Ok(count)
                    }
                    _ => self.say(&format!(
                        "Invalid input. Enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."
                    ))?,
                },
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
            warn!(input = %answer, "rejected player count");
        }
    }

    /// Ask the current player for a row and column until they name an
    /// empty cell.
    pub fn prompt_move(&mut self, engine: &GameEngine) -> Result<Position, ShellError> {
        let mark = engine.current_player();
        let max = engine.side() - 1;

        loop {
            let row = self.read_line(&format!("Player {mark}, enter row (0-{max}): "))?;
            let col = self.read_line(&format!("Player {mark}, enter col (0-{max}): "))?;

            let (Ok(r), Ok(c)) = (row.parse::<i64>(), col.parse::<i64>()) else {
                warn!(%row, %col, "rejected non-numeric move");
                self.say("Invalid input. Enter numbers.")?;
                continue;
            };

            match (usize::try_from(r), usize::try_from(c)) {
                (Ok(r), Ok(c)) if engine.is_legal_move(r, c) => return Ok(Position::new(r, c)),
                _ => {
                    warn!(row = r, col = c, "rejected illegal move");
                    self.say("Invalid move, try again.")?;
                }
            }
        }
    }

    /// Print the board.
    pub fn show_board(&mut self, board: &Board) -> Result<(), ShellError> {
        for line in render_board(board) {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Run a game to completion.
    ///
    /// The computer's moves come from `rng`; everyone else is prompted.
    pub fn play<G: Rng + ?Sized>(
        &mut self,
        engine: &mut GameEngine,
        rng: &mut G,
    ) -> Result<GameStatus, ShellError> {
        let players = engine.roster().len();
        info!(players, cpu_mode = engine.is_cpu_mode(), "game started");
        self.say(&format!("Tic Tac Toe started with {players} players!"))?;
        if engine.is_cpu_mode() {
            self.say("You're playing against the CPU!")?;
        }

        while !engine.status().is_terminal() {
            self.show_board(engine.board())?;

            let pos = if engine.is_computer_turn() {
                let pos = engine.pick_computer_move(rng)?;
                self.say(&format!("CPU chose: {pos}"))?;
                pos
            } else {
                self.prompt_move(engine)?
            };

            let mark = engine.current_player();
            let status = engine.apply_move(pos.row, pos.col)?;
            debug!(%mark, row = pos.row, col = pos.col, %status, "move applied");
        }

        let status = engine.status();
        self.show_board(engine.board())?;
        match status {
            GameStatus::Won(mark) if engine.computer_mark() == Some(mark) => {
                self.say("CPU wins!")?
            }
            GameStatus::Won(mark) => self.say(&format!("Player {mark} wins!"))?,
            GameStatus::Draw => self.say("It's a draw!")?,
            GameStatus::InProgress => {}
        }
        info!(%status, moves = engine.move_count(), "game finished");

        Ok(status)
    }

    fn say(&mut self, line: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
