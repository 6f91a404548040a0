//! Core types: players and marks, board, configuration, errors, RNG.
//!
//! Nothing here performs I/O; the console shell lives in `shell`.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Position};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, EngineError, IllegalMove};
pub use player::{Mark, PlayerId, Roster};
pub use rng::GameRng;
