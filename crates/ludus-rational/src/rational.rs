//! Arbitrary precision rational numbers.
//!
//! This module provides an exact fraction type over `dashu` integers.
//! Values are normalized at construction and never mutated afterwards,
//! so every operation hands back a fresh canonical instance.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::RationalError;
use crate::range::RationalRange;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a strictly positive
/// denominator; zero is stored as `0/1`. Equality, hashing and ordering
/// all operate on this canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: IBig,
    denom: IBig,
}

impl Rational {
    /// Creates a new rational from numerator and denominator,
    /// reduced to lowest terms with the sign moved into the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numer: IBig, denom: IBig) -> Result<Self, RationalError> {
        if denom == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        if DashuSigned::is_negative(&denom) {
            Ok(Self::reduce(-numer, -denom))
        } else {
            Ok(Self::reduce(numer, denom))
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numer: i64, denom: i64) -> Result<Self, RationalError> {
        Self::new(IBig::from(numer), IBig::from(denom))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: IBig) -> Self {
        Self {
            numer: n,
            denom: IBig::ONE,
        }
    }

    /// Divides both parts by their gcd. The denominator must already be
    /// strictly positive.
    fn reduce(numer: IBig, denom: IBig) -> Self {
        let g = IBig::from(numer.clone().gcd(denom.clone()));
        Self {
            numer: numer / &g,
            denom: denom / &g,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.numer
    }

    /// Returns the denominator (always strictly positive).
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.denom
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom == IBig::ONE
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.clone().abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.numer == IBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.numer) {
            1
        } else {
            -1
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(
            self.numer != IBig::ZERO,
            "cannot take reciprocal of zero"
        );
        if DashuSigned::is_negative(&self.numer) {
            Self {
                numer: -self.denom.clone(),
                denom: -self.numer.clone(),
            }
        } else {
            Self {
                numer: self.denom.clone(),
                denom: self.numer.clone(),
            }
        }
    }

    /// Returns the reciprocal, or an error for zero.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if this rational is zero.
    pub fn checked_recip(&self) -> Result<Self, RationalError> {
        if self.numer == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(self.recip())
    }

    /// Divides by `rhs`, returning an error instead of panicking on a
    /// zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.numer == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Builds the closed inclusive range `[self, end]`.
    #[must_use]
    pub fn range_to(self, end: Self) -> RationalRange {
        RationalRange::new(self, end)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numer: IBig::ZERO,
            denom: IBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.numer == IBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numer: IBig::ONE,
            denom: IBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.numer == IBig::ONE && self.denom == IBig::ONE
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

// Ordering by the sign of n1*d2 - d1*n2; denominators are positive,
// so this agrees with the real-number order.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&self.denom * &other.numer))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"n"` or `"n/d"` with base-10 integer components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [n] => Ok(Self::from_integer(IBig::from_str_radix(n, 10)?)),
            [n, d] => Self::new(IBig::from_str_radix(n, 10)?, IBig::from_str_radix(d, 10)?),
            _ => Err(RationalError::MalformedFraction),
        }
    }
}

// Arithmetic operations. The borrowed impls carry the formulas; the
// owned impls delegate.
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numer * &rhs.denom + &self.denom * &rhs.numer,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numer * &rhs.denom - &self.denom * &rhs.numer,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to get an
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.numer != IBig::ZERO, "cannot divide by zero");
        let numer = &self.numer * &rhs.denom;
        let denom = &self.denom * &rhs.numer;
        if DashuSigned::is_negative(&denom) {
            Rational::reduce(-numer, -denom)
        } else {
            Rational::reduce(numer, denom)
        }
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(IBig::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(IBig::from(n))
    }
}
