//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from its base-10 textual representation.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap()
}

/// Creates a [`Rational`] with the given value.
///
/// Accepts anything [`Rational`] converts from, including machine integers,
/// [`Integer`]s, and `(numerator, denominator)` pairs with a non-zero
/// denominator. The result is always stored in lowest terms with a positive
/// denominator.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_normalizes() {
        assert_eq!(rational((4, 6)), rational((2, 3)));
        assert_eq!(rational((1, -2)), rational((-1, 2)));
        assert_eq!(*rational((3, -9)).denom(), 3);
    }

    #[test]
    fn int_from_machine_integers() {
        assert_eq!(int(7), 7);
        assert_eq!(int(-3i64), -3);
        assert_eq!(rational(int(10)), rational(10));
    }

    #[test]
    fn int_from_decimal_string() {
        assert_eq!(int_from_str("123456789012345678901234567890").to_string(),
            "123456789012345678901234567890");
        assert_eq!(int_from_str("-42"), -42);
    }
}
