//! The game-state engine.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{Board, EngineError, GameConfig, Mark, PlayerId, Position, Roster};
use crate::rules::{self, GameStatus, Line};

/// Roster seat played by the computer in cpu mode.
pub const COMPUTER_SEAT: PlayerId = PlayerId::new(1);

/// Owns the board, roster and turn cursor of one game.
///
/// Every failing call leaves the engine untouched.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    roster: Roster,
    turn: PlayerId,
    move_count: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game for `player_count` players (2-4).
    ///
    /// ```
    /// use multitoe::game::GameEngine;
    ///
    /// let engine = GameEngine::new(3, false).unwrap();
    /// assert_eq!(engine.side(), 4);
    /// assert!(GameEngine::new(5, false).is_err());
    /// ```
    pub fn new(player_count: usize, cpu_mode: bool) -> Result<Self, EngineError> {
        Self::from_config(GameConfig::new(player_count, cpu_mode))
    }

    /// Start a game from a configuration.
    pub fn from_config(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        Ok(Self {
            config,
            board: Board::new(config.side()),
            roster: Roster::new(config.player_count),
            turn: PlayerId::default(),
            move_count: 0,
            status: GameStatus::InProgress,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Board side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.board.side()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Marks placed so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Turn cursor.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn is_cpu_mode(&self) -> bool {
        self.config.cpu_mode
    }

    /// Mark of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.roster[self.turn]
    }

    /// Whether the current turn belongs to the computer.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.config.cpu_mode && self.turn == COMPUTER_SEAT
    }

    /// Mark played by the computer, if there is one.
    #[must_use]
    pub fn computer_mark(&self) -> Option<Mark> {
        self.config.cpu_mode.then(|| self.roster[COMPUTER_SEAT])
    }

    /// True iff `(row, col)` is on the board and empty.
    #[must_use]
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.board.check_placement(Position::new(row, col)).is_ok()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.empty_cells().collect()
    }

    /// Place the current player's mark at `(row, col)`.
    ///
    /// Returns the status after the move. The turn only advances while
    /// the game stays in progress.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, EngineError> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver(self.status));
        }

        let mark = self.current_player();
        self.board.place(Position::new(row, col), mark)?;
        self.move_count += 1;

        self.status = if let Some(winner) = self.check_winner() {
            GameStatus::Won(winner)
        } else if self.move_count == self.board.area() {
            GameStatus::Draw
        } else {
            self.turn = self.turn.next(self.roster.len());
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Mark owning a complete row, column or diagonal.
    #[must_use]
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Like [`check_winner`](Self::check_winner), also naming the line.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::winning_line(&self.board)
    }

    /// Pick an empty cell uniformly at random.
    ///
    /// Pass a seeded [`GameRng`](crate::core::GameRng) for reproducible games.
    pub fn pick_computer_move<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        self.legal_moves()
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoLegalMove)
    }
}
