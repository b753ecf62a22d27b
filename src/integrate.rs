//! Syntax-directed indefinite integration.
//!
//! The rule table is strictly narrower than the differentiator's: integration has
//! no chain rule and no product rule here, so many shapes that differentiate fine
//! come back [`Unresolved`] when integrated. The simplifier reacts by keeping a
//! symbolic [`Expr::Integral`] node, which is the user-visible outcome — never a
//! crash, and never a silently wrong expression.

use crate::error::Unresolved;
use crate::expr::{Expr, Func};
use crate::primitive::rational;

/// Computes an antiderivative of `expr` with respect to `var`. No constant of
/// integration is added.
///
/// The rules, dispatched on the shape of `expr`:
///
/// - a number `c` integrates to `c * var`; `var` itself to `1/2 * var^2`; any
///   other symbol is treated as a constant and integrates to `symbol * var`
/// - sums integrate term by term
/// - a product integrates only when exactly one factor is a plain number: the
///   constant is kept and the other factor integrated. Anything else is
///   [`Unresolved::ProductIntegration`].
/// - `var ^ n` with numeric `n` integrates to `1/(n+1) * var^(n+1)`, except
///   `n = -1`, whose antiderivative is `log(var)` (the `n+1` denominator would
///   be zero)
/// - the four elementary functions integrate only when applied directly to
///   `var`: `sin → -cos`, `cos → sin`, `exp → exp`, and `log → var^(-1)`.
///   The `log` rule reproduces reference behavior for output compatibility; the
///   true antiderivative of `log(x)` is `x*log(x) - x`.
pub fn integrate(expr: &Expr, var: &str) -> Result<Expr, Unresolved> {
    match expr {
        Expr::Number(_) => Ok(Expr::mul(expr.clone(), Expr::symbol(var))),

        Expr::Symbol(name) => {
            if name == var {
                Ok(Expr::mul(
                    Expr::Number(rational((1, 2))),
                    Expr::pow(Expr::symbol(var), Expr::Number(rational(2))),
                ))
            } else {
                Ok(Expr::mul(expr.clone(), Expr::symbol(var)))
            }
        },

        Expr::Add(lhs, rhs) => Ok(Expr::add(
            integrate(lhs, var)?,
            integrate(rhs, var)?,
        )),

        Expr::Mul(f, g) => {
            if matches!(&**g, Expr::Number(_)) {
                Ok(Expr::mul((**g).clone(), integrate(f, var)?))
            } else if matches!(&**f, Expr::Number(_)) {
                Ok(Expr::mul((**f).clone(), integrate(g, var)?))
            } else {
                Err(Unresolved::ProductIntegration)
            }
        },

        Expr::Pow(base, exponent) => match (&**base, &**exponent) {
            (Expr::Symbol(name), Expr::Number(n)) if name == var => {
                if *n == -1 {
                    // 1/(n+1) would divide by zero; the antiderivative of x^-1 is
                    // logarithmic
                    return Ok(Expr::func(Func::Log, Expr::symbol(var)));
                }
                let mut new_exp = n.clone();
                new_exp += 1;
                let coefficient = Expr::Number(new_exp.clone().recip());
                Ok(Expr::mul(
                    coefficient,
                    Expr::pow(Expr::symbol(var), Expr::Number(new_exp)),
                ))
            },
            _ => Err(Unresolved::PowerIntegration),
        },

        Expr::Func(kind, u) => match &**u {
            Expr::Symbol(name) if name == var => Ok(match kind {
                Func::Sin => Expr::mul(
                    Expr::Number(rational(-1)),
                    Expr::func(Func::Cos, (**u).clone()),
                ),
                Func::Cos => Expr::func(Func::Sin, (**u).clone()),
                Func::Exp => Expr::func(Func::Exp, (**u).clone()),
                Func::Log => Expr::pow((**u).clone(), Expr::Number(rational(-1))),
            }),
            _ => Err(Unresolved::FunctionArgument),
        },

        Expr::Diff(..) | Expr::Integral(..) => Err(Unresolved::DeferredOperand),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::simplify::simplify;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    #[test]
    fn constants_and_symbols() {
        let c = integrate(&Expr::number("3"), "x").unwrap();
        assert_eq!(c.to_string(), "(3 * x)");

        let self_var = simplify(&integrate(&x(), "x").unwrap());
        assert_eq!(self_var.to_string(), "(1/2 * (x ^ 2))");

        // other symbols are constants
        let other = integrate(&Expr::symbol("a"), "x").unwrap();
        assert_eq!(other.to_string(), "(a * x)");
    }

    #[test]
    fn power_rule() {
        let d = simplify(&integrate(&Expr::pow(x(), Expr::number("2")), "x").unwrap());
        assert_eq!(d.to_string(), "(1/3 * (x ^ 3))");

        let fractional = simplify(&integrate(&Expr::pow(x(), Expr::number("1/2")), "x").unwrap());
        assert_eq!(fractional.to_string(), "(2/3 * (x ^ 3/2))");
    }

    #[test]
    fn power_rule_guards_the_reciprocal() {
        // ∫ x^-1 dx = log(x), not a division by zero
        let d = integrate(&Expr::pow(x(), Expr::number("-1")), "x").unwrap();
        assert_eq!(d, Expr::func(Func::Log, x()));
    }

    #[test]
    fn constant_multiples() {
        let e = Expr::mul(Expr::number("3"), Expr::pow(x(), Expr::number("2")));
        let d = simplify(&integrate(&e, "x").unwrap());
        assert_eq!(d.to_string(), "(x ^ 3)");
    }

    #[test]
    fn product_of_non_constants_is_unresolved() {
        let e = Expr::mul(x(), Expr::func(Func::Sin, x()));
        assert_eq!(integrate(&e, "x"), Err(Unresolved::ProductIntegration));
    }

    #[test]
    fn elementary_functions_of_the_variable() {
        let sin = integrate(&Expr::func(Func::Sin, x()), "x").unwrap();
        assert_eq!(sin.to_string(), "(-1 * cos(x))");

        let cos = integrate(&Expr::func(Func::Cos, x()), "x").unwrap();
        assert_eq!(cos.to_string(), "sin(x)");

        let exp = integrate(&Expr::func(Func::Exp, x()), "x").unwrap();
        assert_eq!(exp.to_string(), "exp(x)");

        let log = integrate(&Expr::func(Func::Log, x()), "x").unwrap();
        assert_eq!(log.to_string(), "(x ^ -1)");
    }

    #[test]
    fn no_chain_rule_for_integration() {
        let nested = Expr::func(Func::Sin, Expr::pow(x(), Expr::number("2")));
        assert_eq!(integrate(&nested, "x"), Err(Unresolved::FunctionArgument));
    }

    #[test]
    fn unresolved_propagates_through_sums() {
        let e = Expr::add(x(), Expr::mul(x(), Expr::func(Func::Sin, x())));
        assert_eq!(integrate(&e, "x"), Err(Unresolved::ProductIntegration));
    }
}
