//! Substitution and evaluation.
//!
//! Three related operations live here, in increasing order of eagerness:
//! [`substitute`] rebuilds the tree with a symbol replaced and folds nothing;
//! [`evaluate`] substitutes and folds numeric subtrees as it goes, approximating
//! function applications of numbers; [`eval_numeric`] collapses a symbol-free tree
//! all the way to an `f64`.

use crate::expr::Expr;
use rug::Rational;

/// Replaces every occurrence of the named symbol with the given numeric value,
/// returning a new tree.
///
/// All other nodes are rebuilt with substituted children; numbers and unmatched
/// symbols are copied unchanged. No numeric folding occurs here — that is the
/// simplifier's job.
pub fn substitute(expr: &Expr, symbol: &str, value: &Rational) -> Expr {
    match expr {
        Expr::Number(_) => expr.clone(),
        Expr::Symbol(name) => {
            if name == symbol {
                Expr::Number(value.clone())
            } else {
                expr.clone()
            }
        },
        Expr::Add(lhs, rhs) => Expr::add(
            substitute(lhs, symbol, value),
            substitute(rhs, symbol, value),
        ),
        Expr::Mul(lhs, rhs) => Expr::mul(
            substitute(lhs, symbol, value),
            substitute(rhs, symbol, value),
        ),
        Expr::Pow(base, exponent) => Expr::pow(
            substitute(base, symbol, value),
            substitute(exponent, symbol, value),
        ),
        Expr::Func(kind, arg) => Expr::func(*kind, substitute(arg, symbol, value)),
        Expr::Diff(inner, var) => Expr::diff(substitute(inner, symbol, value), var.clone()),
        Expr::Integral(inner, var) => {
            Expr::integral(substitute(inner, symbol, value), var.clone())
        },
    }
}

/// Substitutes the named symbol with the given value and eagerly folds numeric
/// subtrees along the way.
///
/// Sums and products of two numbers fold exactly; powers are kept symbolic; a
/// function applied to a number collapses to a rational approximation of the
/// `f64` result. This is a convenience between [`substitute`] (no folding) and
/// [`eval_numeric`] (requires a symbol-free tree).
///
/// # Panics
///
/// Panics when a function application of a number has no finite result (e.g.
/// `log(0)`).
pub fn evaluate(expr: &Expr, symbol: &str, value: &Rational) -> Expr {
    match expr {
        Expr::Number(_) => expr.clone(),
        Expr::Symbol(name) => {
            if name == symbol {
                Expr::Number(value.clone())
            } else {
                expr.clone()
            }
        },
        Expr::Add(lhs, rhs) => {
            let lhs = evaluate(lhs, symbol, value);
            let rhs = evaluate(rhs, symbol, value);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(Rational::from(a + b)),
                _ => Expr::add(lhs, rhs),
            }
        },
        Expr::Mul(lhs, rhs) => {
            let lhs = evaluate(lhs, symbol, value);
            let rhs = evaluate(rhs, symbol, value);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(Rational::from(a * b)),
                _ => Expr::mul(lhs, rhs),
            }
        },
        // powers stay symbolic; exact rational exponentiation is not total
        Expr::Pow(base, exponent) => Expr::pow(
            evaluate(base, symbol, value),
            evaluate(exponent, symbol, value),
        ),
        Expr::Func(kind, arg) => {
            let arg = evaluate(arg, symbol, value);
            match &arg {
                Expr::Number(n) => {
                    let approx = kind.apply(n.to_f64());
                    match Rational::from_f64(approx) {
                        Some(n) => Expr::Number(n),
                        None => panic!(
                            "{}({}) has no finite value to evaluate to",
                            kind.name(),
                            n,
                        ),
                    }
                },
                _ => Expr::func(*kind, arg),
            }
        },
        Expr::Diff(inner, var) => Expr::diff(evaluate(inner, symbol, value), var.clone()),
        Expr::Integral(inner, var) => {
            Expr::integral(evaluate(inner, symbol, value), var.clone())
        },
    }
}

/// Collapses a symbol-free expression to a floating-point value.
///
/// Numbers convert with [`Rational::to_f64`]; sums, products and powers fold with
/// the corresponding `f64` operation; functions apply `sin`/`cos`/`exp`/`ln` to
/// the numerically-evaluated argument.
///
/// # Panics
///
/// Panics if the tree contains a free symbol or a deferred `Diff` / `Integral`
/// node — both are precondition violations, not recoverable errors. Force
/// deferred nodes with [`simplify`](crate::simplify) first.
pub fn eval_numeric(expr: &Expr) -> f64 {
    if let Some(name) = expr.free_symbol() {
        panic!("cannot numerically evaluate an expression with free symbol `{}`", name);
    }
    eval_numeric_impl(expr)
}

fn eval_numeric_impl(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => n.to_f64(),
        Expr::Symbol(_) => unreachable!("free symbols are rejected before evaluation"),
        Expr::Add(lhs, rhs) => eval_numeric_impl(lhs) + eval_numeric_impl(rhs),
        Expr::Mul(lhs, rhs) => eval_numeric_impl(lhs) * eval_numeric_impl(rhs),
        Expr::Pow(base, exponent) => eval_numeric_impl(base).powf(eval_numeric_impl(exponent)),
        Expr::Func(kind, arg) => kind.apply(eval_numeric_impl(arg)),
        Expr::Diff(_, var) => {
            panic!("cannot numerically evaluate a deferred derivative w.r.t. `{}`", var)
        },
        Expr::Integral(_, var) => {
            panic!("cannot numerically evaluate a deferred integral w.r.t. `{}`", var)
        },
    }
}
