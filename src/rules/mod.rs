//! Rules shared by every board size.
//!
//! - What a winning line is
//! - Which mark owns it
//! - What state a game is in

mod lines;
mod status;

pub use lines::{check_winner, winning_line, Line};
pub use status::GameStatus;
