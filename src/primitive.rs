//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Rational`] from a string slice.
///
/// The accepted notations are `"<int>"` and `"<numerator>/<denominator>"`, optionally
/// signed, e.g. `"3"`, `"-6/8"`. The result is always canonical: reduced to lowest
/// terms with a positive denominator, so `"-6/8"` produces `-3/4`.
///
/// # Panics
///
/// Panics if the string is not a valid rational literal, or if the denominator is
/// zero. A malformed literal is a programmer error, not a recoverable condition.
pub fn rational_from_str(s: &str) -> Rational {
    match Rational::parse(s) {
        Ok(parsed) => Rational::from(parsed),
        Err(_) => panic!("invalid rational literal: `{}`", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_canonicalization() {
        assert_eq!(rational_from_str("3/4"), rational((3, 4)));
        assert_eq!(rational_from_str("-6/8"), rational((-3, 4)));
        assert_eq!(rational_from_str("10/5"), int(2));
        assert_eq!(rational_from_str("-17"), int(-17));
    }

    #[test]
    #[should_panic(expected = "invalid rational literal")]
    fn malformed_literal() {
        rational_from_str("three halves");
    }
}
