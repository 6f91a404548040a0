//! Game status and its terminal states.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Where a game stands after a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board filled up with no completed line.
    Draw,
}

impl GameStatus {
    /// `Won` and `Draw` are terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(m) => Some(m),
            _ => None,
        }
    }

    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(self, mark: Mark) -> bool {
        self.winner() == Some(mark)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(m) => write!(f, "{m} won"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
