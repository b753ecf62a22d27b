//! Textual renderings of an expression: a fully-parenthesized infix form and an
//! indented tree dump. Downstream tools diff both against recorded baselines, so
//! the formats here are load-bearing and must not drift.

use std::fmt::{self, Write};
use super::Expr;

/// Fully-parenthesized infix notation.
///
/// Every binary node prints as `"(L op R)"` with `op` one of `+`, `*`, `^`;
/// function application prints as `"name(arg)"`; a deferred derivative as
/// `"d/d<var>(<inner>)"`; a deferred integral as `"∫ <inner> d<var>"`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Self::Pow(base, exponent) => write!(f, "({} ^ {})", base, exponent),
            Self::Func(kind, arg) => write!(f, "{}({})", kind.name(), arg),
            Self::Diff(inner, var) => write!(f, "d/d{}({})", var, inner),
            Self::Integral(inner, var) => write!(f, "∫ {} d{}", inner, var),
        }
    }
}

impl Expr {
    /// Renders the expression as an indented, line-per-node debug view.
    ///
    /// Each node is labeled (`NUMBER: <value>`, `SYMBOL: <name>`, `ADD`, `MUL`,
    /// `POW`, `FUNC: <name>`, `DIFF w.r.t. <var>`, `INTEGRAL w.r.t. <var>`), with
    /// children indented four spaces per level and prefixed `├── ` for the left
    /// operand of a binary node and `└── ` for the right or only child.
    pub fn tree_dump(&self) -> String {
        let mut out = String::new();
        self.tree_dump_impl(&mut out, 0, "");
        out
    }

    fn tree_dump_impl(&self, out: &mut String, indent: usize, prefix: &str) {
        let label = match self {
            Self::Number(n) => format!("NUMBER: {}", n),
            Self::Symbol(name) => format!("SYMBOL: {}", name),
            Self::Add(..) => "ADD".to_string(),
            Self::Mul(..) => "MUL".to_string(),
            Self::Pow(..) => "POW".to_string(),
            Self::Func(kind, _) => format!("FUNC: {}", kind.name()),
            Self::Diff(_, var) => format!("DIFF w.r.t. {}", var),
            Self::Integral(_, var) => format!("INTEGRAL w.r.t. {}", var),
        };

        // infallible: writing to a String cannot fail
        let _ = writeln!(out, "{:indent$}{}{}", "", prefix, label, indent = indent);

        match self {
            Self::Number(_) | Self::Symbol(_) => {},
            Self::Add(lhs, rhs) | Self::Mul(lhs, rhs) | Self::Pow(lhs, rhs) => {
                lhs.tree_dump_impl(out, indent + 4, "├── ");
                rhs.tree_dump_impl(out, indent + 4, "└── ");
            },
            Self::Func(_, inner) | Self::Diff(inner, _) | Self::Integral(inner, _) => {
                inner.tree_dump_impl(out, indent + 4, "└── ");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::expr::{Expr, Func};

    #[test]
    fn infix_binary_operators() {
        let e = Expr::add(
            Expr::mul(Expr::number("3/2"), Expr::symbol("x")),
            Expr::pow(Expr::symbol("y"), Expr::number("-2")),
        );
        assert_eq!(e.to_string(), "((3/2 * x) + (y ^ -2))");
    }

    #[test]
    fn infix_functions_and_deferred_nodes() {
        let sin = Expr::func(Func::Sin, Expr::symbol("x"));
        assert_eq!(sin.to_string(), "sin(x)");

        let diff = Expr::diff(Expr::pow(Expr::symbol("x"), Expr::symbol("x")), "x");
        assert_eq!(diff.to_string(), "d/dx((x ^ x))");

        let int = Expr::integral(
            Expr::mul(Expr::symbol("x"), Expr::func(Func::Sin, Expr::symbol("x"))),
            "x",
        );
        assert_eq!(int.to_string(), "∫ (x * sin(x)) dx");
    }

    #[test]
    fn tree_dump_layout() {
        let e = Expr::add(
            Expr::number("1/3"),
            Expr::func(Func::Log, Expr::symbol("x")),
        );
        assert_eq!(
            e.tree_dump(),
            "ADD\n    ├── NUMBER: 1/3\n    └── FUNC: log\n        └── SYMBOL: x\n",
        );
    }

    #[test]
    fn tree_dump_deferred_nodes() {
        let e = Expr::integral(Expr::diff(Expr::symbol("t"), "t"), "t");
        assert_eq!(
            e.tree_dump(),
            "INTEGRAL w.r.t. t\n    └── DIFF w.r.t. t\n        └── SYMBOL: t\n",
        );
    }
}
