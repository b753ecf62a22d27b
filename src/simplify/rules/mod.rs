//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the **already-simplified**
//! operands of a node as arguments, and returns `Some(expr)` with the rewritten
//! expression if the rule applies, or `None` if the rule does not apply. The
//! `all` function of each submodule tries its rules in canonical order.

pub mod add;
pub mod multiply;
pub mod power;

use crate::expr::Expr;

/// Returns true if the expression yields its place to a numeric right operand
/// under the canonical-ordering swap.
///
/// Constants belong in the left operand of `Add` and `Mul` nodes. The swap
/// applies to symbols, function applications, products and sums; other shapes
/// (powers, deferred nodes) keep their stored order.
pub(crate) fn swaps_with_number(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Symbol(_) | Expr::Func(..) | Expr::Mul(..) | Expr::Add(..),
    )
}
