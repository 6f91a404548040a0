//! Square game board.
//!
//! Cells are stored row-major in a single `Vec`. A cell only ever goes
//! from `Empty` to `Marked`; the board never shrinks or resets.

use serde::{Deserialize, Serialize};

use super::error::IllegalMove;
use super::player::Mark;

/// Zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Square grid of `side * side` cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a position, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Check whether a mark could be placed at `pos`.
    pub fn check_placement(&self, pos: Position) -> Result<(), IllegalMove> {
        let Position { row, col } = pos;
        match self.get(pos) {
            None => Err(IllegalMove::OutOfBounds {
                row,
                col,
                side: self.side,
            }),
            Some(Cell::Marked(mark)) => Err(IllegalMove::Occupied { row, col, mark }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Place a mark in an empty cell.
    ///
    /// The board is untouched on error.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), IllegalMove> {
        self.check_placement(pos)?;
        let i = pos.row * self.side + pos.col;
        self.cells[i] = Cell::Marked(mark);
        Ok(())
    }

    /// Iterate over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&p| self.get(p) == Some(Cell::Empty))
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side * side).map(move |i| Position::new(i / side, i % side))
    }

    /// Cells of one row, left to right.
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Number of marked cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.side && pos.col < self.side).then(|| pos.row * self.side + pos.col)
    }
}
