//! # multitoe
//!
//! Generalized tic-tac-toe for 2-4 players with an optional computer
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: The board side is always `player_count + 1` and
//!    win detection is parameterized by side. Nothing assumes a 3x3 board.
//!
//! 2. **Pure Engine**: `GameEngine` performs no I/O and no logging. Hosting
//!    shells call it with concrete coordinates and render what it returns.
//!
//! 3. **Deterministic Randomness**: The computer's move source is injected,
//!    so a seeded `GameRng` replays the same game.
//!
//! ## Modules
//!
//! - `core`: Marks, roster, board, configuration, errors, RNG
//! - `rules`: Winning lines and game status
//! - `game`: The `GameEngine` state machine
//! - `shell`: Console prompts and board rendering

pub mod core;
pub mod game;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, EngineError, GameConfig, GameRng, IllegalMove, Mark, PlayerId,
    Position, Roster,
};

pub use crate::game::GameEngine;

pub use crate::rules::{GameStatus, Line};

pub use crate::shell::{ConsoleShell, ShellError};
