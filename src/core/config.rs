//! Game configuration.
//!
//! Collaborators turn raw user input into a `GameConfig` and the engine
//! validates it before any state is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported player count.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported player count.
pub const MAX_PLAYERS: usize = 4;

/// Configuration fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players, 2-4.
    pub player_count: usize,
    /// Whether the player at roster index 1 is computer-controlled.
    pub cpu_mode: bool,
}

impl GameConfig {
    /// Create a configuration. Not validated until [`validate`](Self::validate).
    #[must_use]
    pub const fn new(player_count: usize, cpu_mode: bool) -> Self {
        Self {
            player_count,
            cpu_mode,
        }
    }

    /// Check the player count is supported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            })
        }
    }

    /// Board side length: one more than the player count.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.player_count + 1
    }
}
