//! Board coordinates and directions.

use std::fmt;

/// A board position identified by 1-based (row, column) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell at the given 1-based coordinates.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 1-based row index.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the 1-based column index.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A direction of movement on the board.
///
/// `Up` decreases the row, `Down` increases it; `Left` decreases the
/// column, `Right` increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller row indices.
    Up,
    /// Towards larger row indices.
    Down,
    /// Towards smaller column indices.
    Left,
    /// Towards larger column indices.
    Right,
}

impl Direction {
    /// All four directions, for iteration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
