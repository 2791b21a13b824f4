//! # ludus-board
//!
//! Fixed-size square boards of 1-based coordinate cells.
//!
//! This crate provides:
//! - [`SquareBoard`]: an immutable width × width grid with row/column
//!   slicing and directional neighbour lookup
//! - [`GameBoard`]: a square board plus an optional generic payload per
//!   cell, with filter/find/any/all queries
//!
//! Cells are generated once at construction; the cell set of a board
//! never changes afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod game;
pub mod square;

pub use cell::{Cell, Direction};
pub use game::GameBoard;
pub use square::SquareBoard;
