//! Text rendering of the board.

use crate::core::{Board, Cell};

/// Printable lines for a board: each row's cells joined by `" | "`,
/// followed by a dashed separator.
///
/// ```
/// use multitoe::core::Board;
/// use multitoe::shell::render_board;
///
/// let lines = render_board(&Board::new(3));
/// assert_eq!(lines[0], "  |   |  ");
/// assert_eq!(lines[1], "-".repeat(11));
/// ```
#[must_use]
pub fn render_board(board: &Board) -> Vec<String> {
    let separator = "-".repeat(board.side() * 4 - 1);

    (0..board.side())
        .flat_map(|r| {
            let row = board
                .row(r)
                .iter()
                .map(|&c| cell_symbol(c).to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            [row, separator.clone()]
        })
        .collect()
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Marked(m) => m.symbol(),
    }
}
