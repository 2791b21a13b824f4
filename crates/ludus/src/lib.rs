//! # Ludus
//!
//! Two small, independent value-type libraries:
//!
//! - **Rationals**: exact fraction arithmetic on arbitrary precision
//!   integers, always reduced to lowest terms with a positive denominator
//! - **Boards**: fixed-size square grids with directional neighbour
//!   lookup and optional per-cell payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use ludus::prelude::*;
//!
//! let half: Rational = "1/2".parse().unwrap();
//! let third = Rational::from_i64(1, 3).unwrap();
//! assert_eq!((half + third).to_string(), "5/6");
//!
//! let mut board = GameBoard::new(3);
//! let center = board.board().cell(2, 2);
//! board.set(center, Some('x'));
//! assert_eq!(board.find(|payload| payload.is_some()), Some(center));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ludus_board as board;
pub use ludus_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ludus_board::{Cell, Direction, GameBoard, SquareBoard};
    pub use ludus_rational::{Rational, RationalError, RationalRange};
}
