//! Square boards with per-cell payloads.

use hashbrown::{HashMap, HashSet};

use crate::cell::Cell;
use crate::square::SquareBoard;

/// A square board that stores an optional payload of type `T` in every
/// cell.
///
/// All cells start out empty; payloads may be reassigned freely, but the
/// cell set itself never changes. Queries that scan the board visit
/// cells in row-major order, so [`GameBoard::find`] is deterministic.
#[derive(Clone, Debug)]
pub struct GameBoard<T> {
    board: SquareBoard,
    contents: HashMap<Cell, Option<T>>,
}

impl<T> GameBoard<T> {
    /// Creates a board of the given width with every cell empty.
    #[must_use]
    pub fn new(width: usize) -> Self {
        let board = SquareBoard::new(width);
        let contents = board.cells().iter().map(|&cell| (cell, None)).collect();
        Self { board, contents }
    }

    /// Returns the underlying square board.
    #[must_use]
    pub fn board(&self) -> &SquareBoard {
        &self.board
    }

    /// Returns the board width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// Returns the payload stored in `cell`, if any.
    ///
    /// Cells outside the board read as empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.contents.get(&cell).and_then(Option::as_ref)
    }

    /// Stores `value` in `cell`, replacing any previous payload.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        assert!(
            self.contents.contains_key(&cell),
            "cell {cell} is not on the board"
        );
        self.contents.insert(cell, value);
    }

    /// Returns the set of cells whose payload satisfies `predicate`.
    ///
    /// The predicate sees `None` for empty cells.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(Option<&T>) -> bool) -> HashSet<Cell> {
        self.board
            .cells()
            .iter()
            .copied()
            .filter(|&cell| predicate(self.get(cell)))
            .collect()
    }

    /// Returns the first cell (in row-major order) whose payload
    /// satisfies `predicate`, or `None`.
    #[must_use]
    pub fn find(&self, predicate: impl Fn(Option<&T>) -> bool) -> Option<Cell> {
        self.board
            .cells()
            .iter()
            .copied()
            .find(|&cell| predicate(self.get(cell)))
    }

    /// Returns true if any cell's payload satisfies `predicate`.
    #[must_use]
    pub fn any(&self, predicate: impl Fn(Option<&T>) -> bool) -> bool {
        self.find(predicate).is_some()
    }

    /// Returns true if every cell's payload satisfies `predicate`.
    #[must_use]
    pub fn all(&self, predicate: impl Fn(Option<&T>) -> bool) -> bool {
        self.board
            .cells()
            .iter()
            .all(|&cell| predicate(self.get(cell)))
    }
}
