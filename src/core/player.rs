//! Player identification, marks and the turn roster.
//!
//! ## PlayerId
//!
//! Type-safe turn cursor: an index into the roster.
//!
//! ## Mark
//!
//! The symbol a player places on the board, drawn from a fixed
//! alphabet of four.
//!
//! ## Roster
//!
//! The ordered marks taking part in a game, fixed at game start.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

/// Player identifier (turn cursor).
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one, wrapping round-robin.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use multitoe::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
    Y,
    Z,
}

impl Mark {
    /// The full alphabet, in roster order.
    pub const ALL: [Mark; 4] = [Mark::X, Mark::O, Mark::Y, Mark::Z];

    /// The printable symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Y => 'Y',
            Mark::Z => 'Z',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered marks of the players in a game.
///
/// Built by truncating [`Mark::ALL`] to the player count, so marks are
/// always distinct.
///
/// ## Example
///
/// ```
/// use multitoe::core::{Mark, PlayerId, Roster};
///
/// let roster = Roster::new(3);
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster[PlayerId::new(2)], Mark::Y);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roster {
    marks: SmallVec<[Mark; 4]>,
}

impl Roster {
    /// Create the roster for `player_count` players.
    ///
    /// Callers validate the count first; see `GameConfig::validate`.
    pub fn new(player_count: usize) -> Self {
        assert!(
            (1..=Mark::ALL.len()).contains(&player_count),
            "Roster supports 1-{} players",
            Mark::ALL.len()
        );

        Self {
            marks: Mark::ALL[..player_count].iter().copied().collect(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate over (PlayerId, Mark) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Mark)> + '_ {
        self.marks
            .iter()
            .enumerate()
            .map(|(i, &m)| (PlayerId(i as u8), m))
    }
}

impl Index<PlayerId> for Roster {
    type Output = Mark;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.marks[player.index()]
    }
}
