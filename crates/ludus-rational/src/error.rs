//! Errors raised by rational construction and parsing.

use dashu::base::error::ParseError;
use thiserror::Error;

/// Errors that can occur when constructing or parsing a rational.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator at construction, or division by zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Parsed text contained more than one '/' separator.
    #[error("not a fraction")]
    MalformedFraction,

    /// A numerator or denominator component was not a valid integer literal.
    #[error("not an integer: {0}")]
    MalformedInteger(#[from] ParseError),
}
