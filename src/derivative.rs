//! Syntax-directed differentiation.
//!
//! The rule table is intentionally small: each shape of expression either has a
//! textbook derivative rule or is reported as [`Unresolved`]. Nothing here
//! simplifies its output — callers (notably the simplifier when forcing a
//! [`Expr::Diff`] node) run the result through [`simplify`](crate::simplify)
//! themselves.

use crate::error::Unresolved;
use crate::expr::{Expr, Func};
use crate::primitive::rational;
use rug::Rational;

/// Computes the derivative of `expr` with respect to `var`.
///
/// The rules, dispatched on the shape of `expr`:
///
/// - a number differentiates to `0`; `var` itself to `1`; any other symbol to `0`
/// - sums by the sum rule, products by the product rule
/// - `base ^ exponent` **only** when `exponent` is numeric and `base` is exactly
///   `var`: the result is `exponent * base^(exponent - 1)`. Any other power shape
///   is [`Unresolved::GeneralPowerRule`] — a scope limitation, not a bug.
/// - the four elementary functions by the chain rule.
///
/// Deferred [`Expr::Diff`] / [`Expr::Integral`] operands are not handled here;
/// only the simplifier forces those.
///
/// An `Err` must propagate to the caller — it is never acceptable to substitute a
/// wrong-but-plausible expression for a missing rule.
pub fn differentiate(expr: &Expr, var: &str) -> Result<Expr, Unresolved> {
    match expr {
        Expr::Number(_) => Ok(Expr::Number(rational(0))),

        Expr::Symbol(name) => {
            if name == var {
                Ok(Expr::Number(rational(1)))
            } else {
                Ok(Expr::Number(rational(0)))
            }
        },

        Expr::Add(lhs, rhs) => Ok(Expr::add(
            differentiate(lhs, var)?,
            differentiate(rhs, var)?,
        )),

        Expr::Mul(f, g) => {
            let df = differentiate(f, var)?;
            let dg = differentiate(g, var)?;
            Ok(Expr::add(
                Expr::mul(df, (**g).clone()),
                Expr::mul((**f).clone(), dg),
            ))
        },

        Expr::Pow(base, exponent) => match (&**base, &**exponent) {
            (Expr::Symbol(name), Expr::Number(n)) if name == var => {
                let mut new_exp = n.clone();
                new_exp -= 1;
                Ok(Expr::mul(
                    Expr::Number(n.clone()),
                    Expr::pow((**base).clone(), Expr::Number(new_exp)),
                ))
            },
            _ => Err(Unresolved::GeneralPowerRule),
        },

        Expr::Func(kind, u) => {
            let du = differentiate(u, var)?;
            let outer = match kind {
                Func::Sin => Expr::func(Func::Cos, (**u).clone()),
                Func::Cos => Expr::mul(
                    Expr::Number(rational(-1)),
                    Expr::func(Func::Sin, (**u).clone()),
                ),
                Func::Exp => Expr::func(Func::Exp, (**u).clone()),
                Func::Log => Expr::pow((**u).clone(), Expr::Number(rational(-1))),
            };
            Ok(Expr::mul(outer, du))
        },

        Expr::Diff(..) | Expr::Integral(..) => Err(Unresolved::DeferredOperand),
    }
}
