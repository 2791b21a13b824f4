//! Immutable square boards.

use crate::cell::{Cell, Direction};

/// A width × width board of cells stored in row-major order.
///
/// All cells are generated at construction with coordinates running
/// from 1 to `width` on each axis; the grid never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareBoard {
    width: usize,
    cells: Vec<Cell>,
}

impl SquareBoard {
    /// Creates a board of the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        let mut cells = Vec::with_capacity(width * width);
        for i in 1..=width {
            for j in 1..=width {
                cells.push(Cell::new(i, j));
            }
        }
        Self { width, cells }
    }

    /// Returns the board width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at 1-based (i, j).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `1..=width`; use
    /// [`SquareBoard::get`] for a checked lookup.
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Cell {
        assert!(
            self.in_bounds(i, j),
            "cell ({i}, {j}) is outside a board of width {}",
            self.width
        );
        self.cells[(i - 1) * self.width + (j - 1)]
    }

    /// Returns the cell at 1-based (i, j), or `None` if out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<Cell> {
        if self.in_bounds(i, j) {
            Some(self.cells[(i - 1) * self.width + (j - 1)])
        } else {
            None
        }
    }

    /// Returns the cells of row `i` along the given column progression,
    /// skipping coordinates that fall outside the board.
    #[must_use]
    pub fn row(&self, i: usize, js: impl IntoIterator<Item = usize>) -> Vec<Cell> {
        js.into_iter().filter_map(|j| self.get(i, j)).collect()
    }

    /// Returns the cells of column `j` along the given row progression,
    /// skipping coordinates that fall outside the board.
    #[must_use]
    pub fn column(&self, is: impl IntoIterator<Item = usize>, j: usize) -> Vec<Cell> {
        is.into_iter().filter_map(|i| self.get(i, j)).collect()
    }

    /// Returns the neighbour of `cell` in the given direction, or `None`
    /// when the cell sits at that edge of the board.
    #[must_use]
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (i, j) = (cell.row(), cell.col());
        let (ni, nj) = match direction {
            Direction::Up => (i.checked_sub(1)?, j),
            Direction::Down => (i + 1, j),
            Direction::Left => (i, j.checked_sub(1)?),
            Direction::Right => (i, j + 1),
        };
        self.get(ni, nj)
    }

    fn in_bounds(&self, i: usize, j: usize) -> bool {
        (1..=self.width).contains(&i) && (1..=self.width).contains(&j)
    }
}
