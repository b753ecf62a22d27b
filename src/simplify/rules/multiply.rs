//! Simplification rules for product nodes: numeric folding, identities, canonical
//! ordering, constant absorption and like-power merging.

use crate::expr::Expr;
use crate::primitive::rational;
use crate::simplify::{rules::swaps_with_number, simplify};
use rug::Rational;

/// `number * number` folds to a single canonical number, exactly.
pub fn fold_numbers(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Some(Expr::Number(Rational::from(a * b))),
        _ => None,
    }
}

/// `1 * a = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if lhs.is_one() {
        Some(rhs.clone())
    } else {
        None
    }
}

/// `0 * a = 0`
pub fn multiply_zero(lhs: &Expr, _rhs: &Expr) -> Option<Expr> {
    if lhs.is_zero() {
        Some(Expr::Number(rational(0)))
    } else {
        None
    }
}

/// Moves a numeric right operand into the left, its canonical position, and
/// re-simplifies the swapped node. A right-hand `1` or `0` reaches the identity
/// and annihilator rules through this swap.
pub fn numeric_left(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if swaps_with_number(lhs) && matches!(rhs, Expr::Number(_)) {
        Some(simplify(&Expr::mul(rhs.clone(), lhs.clone())))
    } else {
        None
    }
}

/// Absorbs a leading constant one level into a nested product or sum:
///
/// `k * (c * e) = (k*c) * e` when `c` is numeric
/// `k * (c + e) = (k*c) + (k*e)`
pub fn absorb_constant(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if !matches!(lhs, Expr::Number(_)) {
        return None;
    }

    match rhs {
        Expr::Mul(c, e) => match (lhs, &**c) {
            (Expr::Number(k), Expr::Number(c)) => {
                let merged = Expr::Number(Rational::from(k * c));
                Some(simplify(&Expr::mul(merged, (**e).clone())))
            },
            _ => None,
        },
        Expr::Add(c, e) => Some(simplify(&Expr::add(
            Expr::mul(lhs.clone(), (**c).clone()),
            Expr::mul(lhs.clone(), (**e).clone()),
        ))),
        _ => None,
    }
}

/// `a * a = a^2` for structurally equal factors.
pub fn square(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if lhs == rhs {
        Some(simplify(&Expr::pow(lhs.clone(), Expr::Number(rational(2)))))
    } else {
        None
    }
}

/// `a^b * a^c = a^(b+c)` when the bases are structurally equal.
///
/// The merged power is re-simplified so that a degenerate exponent sum (`0`, `1`)
/// collapses in the same pass.
pub fn combine_powers(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if let (Expr::Pow(b1, e1), Expr::Pow(b2, e2)) = (lhs, rhs) {
        if b1 == b2 {
            let exponent = simplify(&Expr::add((**e1).clone(), (**e2).clone()));
            return Some(simplify(&Expr::pow((**b1).clone(), exponent)));
        }
    }

    None
}

/// Applies all multiplication rules to a pair of already-simplified operands.
pub fn all(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    fold_numbers(lhs, rhs)
        .or_else(|| multiply_one(lhs, rhs))
        .or_else(|| multiply_zero(lhs, rhs))
        .or_else(|| numeric_left(lhs, rhs))
        .or_else(|| absorb_constant(lhs, rhs))
        .or_else(|| square(lhs, rhs))
        .or_else(|| combine_powers(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    #[test]
    fn identity_and_annihilator_fire_on_the_left() {
        assert_eq!(multiply_one(&Expr::number("1"), &x()), Some(x()));
        assert_eq!(multiply_one(&x(), &Expr::number("1")), None);

        assert_eq!(
            multiply_zero(&Expr::number("0"), &x()),
            Some(Expr::number("0")),
        );
    }

    #[test]
    fn absorption_folds_nested_constants() {
        let nested = Expr::mul(Expr::number("3"), x());
        let absorbed = absorb_constant(&Expr::number("2"), &nested).unwrap();
        assert_eq!(absorbed.to_string(), "(6 * x)");
    }

    #[test]
    fn absorption_distributes_over_sums() {
        let sum = Expr::add(Expr::number("3"), x());
        let absorbed = absorb_constant(&Expr::number("2"), &sum).unwrap();
        assert_eq!(absorbed.to_string(), "(6 + (2 * x))");
    }

    #[test]
    fn absorption_needs_a_numeric_factor_to_merge_with() {
        let nested = Expr::mul(x(), Expr::symbol("y"));
        assert_eq!(absorb_constant(&Expr::number("2"), &nested), None);
    }

    #[test]
    fn powers_merge_only_on_equal_bases() {
        let xa = Expr::pow(x(), Expr::symbol("a"));
        let xb = Expr::pow(x(), Expr::symbol("b"));
        let merged = combine_powers(&xa, &xb).unwrap();
        assert_eq!(merged.to_string(), "(x ^ (a + b))");

        let ya = Expr::pow(Expr::symbol("y"), Expr::symbol("a"));
        assert_eq!(combine_powers(&xa, &ya), None);
    }
}
