//! Console front end: prompts, board rendering and the game loop.
//!
//! This is the only part of the crate that performs I/O or logs.

mod console;
mod render;

pub use console::ConsoleShell;
pub use render::render_board;

use thiserror::Error;

use crate::core::EngineError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before the game finished")]
    InputClosed,
    #[error(transparent)]
    Engine(#[from] EngineError),
}
