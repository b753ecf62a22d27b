//! The canonicalizing rewrite engine.
//!
//! [`simplify`] walks the tree bottom-up, simplifying the children of a node before
//! trying the rewrite rules for the node itself. Each rule is a function in
//! [`rules`] that takes the already-simplified operands and returns `Some(expr)`
//! if it applies, or `None` to let the next rule try; when every rule passes, the
//! node is rebuilt from its simplified children and kept.
//!
//! The engine is deterministic for a fixed input and idempotent on its own output
//! (`simplify(simplify(e)) == simplify(e)`), though it is not proven confluent for
//! arbitrary orderings of rewrite application. Rules that build a new composite
//! node re-enter [`simplify`] on it, which is what makes single top-level passes
//! sufficient.
//!
//! # Canonical form
//!
//! The rules push expressions toward a canonical shape: numeric subtrees folded
//! into a single canonical rational, additive and multiplicative identities
//! removed, numeric constants moved to the left operand, constants absorbed one
//! level into nested products and sums, like terms merged into a single
//! coefficient, and like powers merged into a single exponent.
//!
//! # Forcing deferred nodes
//!
//! A [`Diff`](Expr::Diff) or [`Integral`](Expr::Integral) node is *forced* here:
//! the inner expression is simplified first, then handed to
//! [`differentiate`](crate::differentiate) / [`integrate`](crate::integrate). On
//! success the concrete result is recursively simplified and returned; on
//! [`Unresolved`](crate::Unresolved) the node survives in symbolic form, wrapping
//! its simplified inner expression. Forcing never interleaves with the other
//! rewrite rules.
//!
//! # Recursion depth
//!
//! Simplification recurses once per tree level, so the practical input depth is
//! bounded by the call stack (thousands of levels in practice). Degenerate inputs
//! deeper than that will overflow the stack rather than return.

pub mod rules;

use crate::derivative::differentiate;
use crate::expr::Expr;
use crate::integrate::integrate;

/// Simplifies an expression to its canonical form.
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => expr.clone(),

        Expr::Add(lhs, rhs) => {
            let lhs = simplify(lhs);
            let rhs = simplify(rhs);
            match rules::add::all(&lhs, &rhs) {
                Some(simplified) => simplified,
                None => Expr::add(lhs, rhs),
            }
        },

        Expr::Mul(lhs, rhs) => {
            let lhs = simplify(lhs);
            let rhs = simplify(rhs);
            match rules::multiply::all(&lhs, &rhs) {
                Some(simplified) => simplified,
                None => Expr::mul(lhs, rhs),
            }
        },

        Expr::Pow(base, exponent) => {
            let base = simplify(base);
            let exponent = simplify(exponent);
            match rules::power::all(&base, &exponent) {
                Some(simplified) => simplified,
                None => Expr::pow(base, exponent),
            }
        },

        // function identity folding is not performed; only the argument simplifies
        Expr::Func(kind, arg) => Expr::func(*kind, simplify(arg)),

        Expr::Diff(inner, var) => {
            let inner = simplify(inner);
            match differentiate(&inner, var) {
                Ok(derivative) => simplify(&derivative),
                Err(_) => Expr::diff(inner, var.clone()),
            }
        },

        Expr::Integral(inner, var) => {
            let inner = simplify(inner);
            match integrate(&inner, var) {
                Ok(antiderivative) => simplify(&antiderivative),
                Err(_) => Expr::integral(inner, var.clone()),
            }
        },
    }
}
