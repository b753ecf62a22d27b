//! Simplification rules for sum nodes: numeric folding, identity removal,
//! canonical ordering and like-term merging.

use crate::expr::Expr;
use crate::simplify::{rules::swaps_with_number, simplify};
use rug::Rational;

/// `number + number` folds to a single canonical number, exactly.
pub fn fold_numbers(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Some(Expr::Number(Rational::from(a + b))),
        _ => None,
    }
}

/// `0 + a = a`
/// `a + 0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if lhs.is_zero() {
        Some(rhs.clone())
    } else if rhs.is_zero() {
        Some(lhs.clone())
    } else {
        None
    }
}

/// Moves a numeric right operand into the left, its canonical position, and
/// re-simplifies the swapped node.
pub fn numeric_left(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if swaps_with_number(lhs) && matches!(rhs, Expr::Number(_)) {
        Some(simplify(&Expr::add(rhs.clone(), lhs.clone())))
    } else {
        None
    }
}

/// `a*x + b*x = (a+b)*x` when the right-hand factors are structurally equal.
///
/// Both terms must be products; the merged coefficient sum and the resulting
/// product are re-simplified so that degenerate coefficients (`0`, `1`) collapse
/// in the same pass.
pub fn combine_like_terms(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if let (Expr::Mul(a, x1), Expr::Mul(b, x2)) = (lhs, rhs) {
        if x1 == x2 {
            let coefficient = simplify(&Expr::add((**a).clone(), (**b).clone()));
            return Some(simplify(&Expr::mul(coefficient, (**x1).clone())));
        }
    }

    None
}

/// Applies all addition rules to a pair of already-simplified operands.
pub fn all(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    fold_numbers(lhs, rhs)
        .or_else(|| add_zero(lhs, rhs))
        .or_else(|| numeric_left(lhs, rhs))
        .or_else(|| combine_like_terms(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::primitive::rational;

    #[test]
    fn folding_is_exact() {
        let folded = fold_numbers(&Expr::number("1/10"), &Expr::number("2/10")).unwrap();
        // 0.1 + 0.2 has no floating error here
        assert_eq!(folded, Expr::Number(rational((3, 10))));
    }

    #[test]
    fn zero_elimination() {
        let x = Expr::symbol("x");
        assert_eq!(add_zero(&Expr::number("0"), &x), Some(x.clone()));
        assert_eq!(add_zero(&x, &Expr::number("0")), Some(x.clone()));
        assert_eq!(add_zero(&x, &Expr::number("2")), None);
    }

    #[test]
    fn swap_applies_to_sums_too() {
        let inner = Expr::add(Expr::symbol("x"), Expr::symbol("y"));
        let swapped = numeric_left(&inner, &Expr::number("1")).unwrap();
        assert_eq!(swapped.to_string(), "(1 + (x + y))");
    }

    #[test]
    fn swap_leaves_powers_alone() {
        let pow = Expr::pow(Expr::symbol("x"), Expr::number("2"));
        assert_eq!(numeric_left(&pow, &Expr::number("1")), None);
    }

    #[test]
    fn unlike_terms_stay_apart() {
        let ax = Expr::mul(Expr::number("2"), Expr::symbol("x"));
        let by = Expr::mul(Expr::number("3"), Expr::symbol("y"));
        assert_eq!(combine_like_terms(&ax, &by), None);
    }
}
