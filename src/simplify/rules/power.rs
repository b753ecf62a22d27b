//! Simplification rules for power nodes.

use crate::expr::Expr;
use crate::primitive::rational;

/// `a^0 = 1`
/// `a^1 = a`
pub fn exponent_identities(base: &Expr, exponent: &Expr) -> Option<Expr> {
    let n = exponent.as_number()?;
    if *n == 0 {
        Some(Expr::Number(rational(1)))
    } else if *n == 1 {
        Some(base.clone())
    } else {
        None
    }
}

/// `0^a = 0`
/// `1^a = 1`
///
/// The zero rule carries no guard for a zero exponent; it never sees a literal
/// `0^0` because [`exponent_identities`] runs first, but `0^x` with a symbolic
/// exponent rewrites to `0` regardless of what `x` might later become.
pub fn base_identities(base: &Expr, _exponent: &Expr) -> Option<Expr> {
    let n = base.as_number()?;
    if *n == 0 {
        Some(Expr::Number(rational(0)))
    } else if *n == 1 {
        Some(Expr::Number(rational(1)))
    } else {
        None
    }
}

/// Applies all power rules to an already-simplified base and exponent.
pub fn all(base: &Expr, exponent: &Expr) -> Option<Expr> {
    exponent_identities(base, exponent)
        .or_else(|| base_identities(base, exponent))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn exponent_identities_come_first() {
        let zero = Expr::number("0");
        assert_eq!(all(&zero, &zero), Some(Expr::number("1")));
    }

    #[test]
    fn symbolic_zero_base() {
        let x = Expr::symbol("x");
        assert_eq!(all(&Expr::number("0"), &x), Some(Expr::number("0")));
        assert_eq!(all(&Expr::number("1"), &x), Some(Expr::number("1")));
    }

    #[test]
    fn no_rule_for_general_powers() {
        assert_eq!(all(&Expr::symbol("x"), &Expr::number("2")), None);
        assert_eq!(all(&Expr::number("2"), &Expr::number("10")), None);
    }
}
