//! Winning lines on a board of any side length.
//!
//! A board of side N has 2N + 2 lines: N rows, N columns and the two
//! full-length diagonals. They are always scanned in that order, so the
//! result is deterministic even though a single move can complete at
//! most one mark's lines.

use crate::core::{Board, Cell, Mark, Position};

/// One row, column or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// `(i, i)`
    MainDiagonal,
    /// `(i, side - 1 - i)`
    AntiDiagonal,
}

impl Line {
    /// Every line of a board, in scan order.
    pub fn all(side: usize) -> impl Iterator<Item = Line> {
        (0..side)
            .map(Line::Row)
            .chain((0..side).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Cells covered by this line.
    pub fn positions(self, side: usize) -> impl Iterator<Item = Position> {
        (0..side).map(move |i| match self {
            Line::Row(r) => Position::new(r, i),
            Line::Column(c) => Position::new(i, c),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, side - 1 - i),
        })
    }

    /// The mark filling every cell of this line, if there is one.
    ///
    /// A line with any empty cell, including an all-empty line, has no owner.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let mut cells = self.positions(board.side()).map(|p| board.get(p));
        let first = cells.next()??.mark()?;
        cells
            .all(|c| c == Some(Cell::Marked(first)))
            .then_some(first)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {r}"),
            Line::Column(c) => write!(f, "column {c}"),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// First completed line and its mark.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::all(board.side()).find_map(|line| line.owner(board).map(|m| (line, m)))
}

/// Mark that completed a line, if any.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, m)| m)
}
