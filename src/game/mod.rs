//! Generalized tic-tac-toe for 2-4 players.
//!
//! - The board side is one more than the player count (3x3 up to 5x5)
//! - Players take turns in roster order: X, O, Y, Z
//! - A full row, column or diagonal of one mark wins
//! - A full board with no such line is a draw
//! - Optionally the second player is driven by the computer, which
//!   picks uniformly among empty cells

mod engine;

pub use engine::{GameEngine, COMPUTER_SEAT};
