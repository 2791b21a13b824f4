//! Closed inclusive ranges over rationals.

use crate::rational::Rational;

/// A closed inclusive range `[start, end]` of rationals.
///
/// Built directly or via [`Rational::range_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    /// Creates the range `[start, end]`.
    #[must_use]
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> &Rational {
        &self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// Returns true if `value` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        &self.start <= value && value <= &self.end
    }

    /// Returns true if the range contains no values (start > end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
