//! Engine error types.
//!
//! Every error leaves the engine exactly as it was before the failing call.

use thiserror::Error;

use super::player::Mark;
use crate::rules::GameStatus;

/// Invalid game configuration. Raised before any game state exists.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {count} is outside the supported range {min}-{max}")]
    PlayerCount { count: usize, min: usize, max: usize },
}

/// A move that cannot be placed. The caller should ask for another one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cell ({row}, {col}) is outside the {side}x{side} board")]
    OutOfBounds { row: usize, col: usize, side: usize },
    #[error("cell ({row}, {col}) is already taken by {mark}")]
    Occupied { row: usize, col: usize, mark: Mark },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
    #[error("game is already over ({0})")]
    GameOver(GameStatus),
    #[error("no empty cell is left to pick")]
    NoLegalMove,
}
