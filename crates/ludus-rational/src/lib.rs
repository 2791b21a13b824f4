//! # ludus-rational
//!
//! Exact rational number arithmetic on arbitrary precision integers.
//!
//! This crate wraps `dashu` integers to provide:
//! - An immutable, always-normalized fraction type (`Rational`)
//! - Closed inclusive ranges over rationals (`RationalRange`)
//! - Parsing and formatting in the `n` / `n/d` text form
//!
//! Every value is kept in lowest terms with a strictly positive
//! denominator, so equality, hashing and ordering all work on the
//! canonical representative.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod range;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use range::RationalRange;
pub use rational::Rational;
