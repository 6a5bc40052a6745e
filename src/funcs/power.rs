//! Exact exponentiation over the rational numbers.

use rug::{Integer, Rational};
use std::fmt;

/// An operation was applied outside the domain where an exact rational
/// result exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A rational base was raised to an exponent that is not integer-valued.
    /// Extracting radicals is out of scope, so `2^(1/2)` has no exact result.
    NonIntegerExponent,
    /// Zero was raised to a negative power.
    ZeroToNegativePower,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerExponent => write!(f, "exponent is not an integer"),
            Self::ZeroToNegativePower => write!(f, "zero raised to a negative power"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Raises `base` to the power of an arbitrary [`Integer`] exponent using
/// classical square-and-multiply.
///
/// A negative exponent inverts the base first, which fails with
/// [`DomainError::ZeroToNegativePower`] when the base is zero.
pub fn pow_integer(mut base: Rational, mut exponent: Integer) -> Result<Rational, DomainError> {
    if exponent < 0 {
        if base == 0 {
            return Err(DomainError::ZeroToNegativePower);
        }
        base.recip_mut();
        exponent = -exponent;
    }

    let mut result = Rational::from(1);
    while exponent != 0 {
        if exponent.is_even() {
            base = Rational::from(&base * &base);
            exponent /= 2;
        } else {
            result *= &base;
            exponent -= 1;
        }
    }
    Ok(result)
}

/// Raises `base` to the power of a [`Rational`] exponent.
///
/// The exponent must be integer-valued; a non-trivial denominator fails with
/// [`DomainError::NonIntegerExponent`]. The simplifier guards on this before
/// dispatching to its integer-power rules, so the error only surfaces on
/// direct use.
pub fn pow(base: &Rational, exponent: &Rational) -> Result<Rational, DomainError> {
    if *exponent.denom() != 1 {
        return Err(DomainError::NonIntegerExponent);
    }
    pow_integer(base.clone(), exponent.numer().clone())
}
