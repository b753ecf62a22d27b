//! The expression tree every algorithm in this crate operates on.
//!
//! An [`Expr`] is a plain recursive `enum`: each node owns its children outright, so
//! duplicating a subexpression is an explicit [`Clone`] (a deep copy), and a node is
//! destroyed by dropping it. There is no sharing between subtrees — an expression is
//! a tree, never a DAG.
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions
//! are equal iff they have the same variant, equal payloads (exact rational
//! comparison for numbers, string comparison for symbol and variable names, matching
//! function kind), and pairwise-equal children *in stored order*. No mathematical
//! equivalence is attempted: `x + y` and `y + x` are unequal unless the simplifier
//! has already canonicalized both to the same order. This is exactly the notion of
//! equality the simplifier uses to merge like terms and like powers.

mod display;
mod iter;

use crate::primitive::{rational, rational_from_str};
use crate::simplify::simplify;
pub use iter::ExprIter;
use rug::Rational;

/// The four elementary functions the kernel knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Exp,
    Log,
}

impl Func {
    /// The name used when printing an application of this function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
            Self::Log => "log",
        }
    }

    /// Applies the corresponding `f64` function. `Log` is the natural logarithm.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
            Self::Log => x.ln(),
        }
    }
}

/// A symbolic expression.
///
/// The binary variants store their operands in the order they were built;
/// commutativity is the simplifier's concern, not the data model's. The two deferred
/// variants, [`Diff`](Self::Diff) and [`Integral`](Self::Integral), represent "apply
/// this operator once forced" — the simplifier forces them by calling
/// [`differentiate`](crate::differentiate) / [`integrate`](crate::integrate) and
/// falls back to keeping the node symbolic when no rule matches.
///
/// Each deferred variant carries its own variable name; there is no symbol table or
/// interning scheme anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An exact rational constant, always in lowest terms with a positive
    /// denominator.
    Number(Rational),

    /// An opaque identifier. Two symbols are equal iff their names are equal.
    Symbol(String),

    /// A sum of two operands.
    Add(Box<Expr>, Box<Expr>),

    /// A product of two operands.
    Mul(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Pow(Box<Expr>, Box<Expr>),

    /// An elementary function applied to one argument.
    Func(Func, Box<Expr>),

    /// A deferred derivative of the inner expression with respect to the named
    /// variable.
    Diff(Box<Expr>, String),

    /// A deferred indefinite integral of the inner expression with respect to the
    /// named variable.
    Integral(Box<Expr>, String),
}

impl Expr {
    /// Creates a [`Expr::Number`] from a literal, either `"<int>"` or
    /// `"<numerator>/<denominator>"`, optionally signed. The stored rational is
    /// canonical regardless of the form of the literal.
    ///
    /// # Panics
    ///
    /// Panics if the literal is malformed or has a zero denominator.
    pub fn number(literal: &str) -> Self {
        Self::Number(rational_from_str(literal))
    }

    /// Creates a [`Expr::Symbol`] with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a sum node. No simplification is done.
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a product node. No simplification is done.
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::Mul(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a power node. No simplification is done.
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::Pow(Box::new(base), Box::new(exponent))
    }

    /// Creates a function application node. No simplification is done.
    pub fn func(kind: Func, arg: Expr) -> Self {
        Self::Func(kind, Box::new(arg))
    }

    /// Creates a deferred derivative node. The derivative is not computed until the
    /// simplifier forces the node.
    pub fn diff(inner: Expr, var: impl Into<String>) -> Self {
        Self::Diff(Box::new(inner), var.into())
    }

    /// Creates a deferred indefinite integral node. The antiderivative is not
    /// computed until the simplifier forces the node.
    pub fn integral(inner: Expr, var: impl Into<String>) -> Self {
        Self::Integral(Box::new(inner), var.into())
    }

    /// Negates an expression.
    ///
    /// A numeric operand is negated directly; anything else becomes
    /// `(-1 * operand)`.
    pub fn neg(operand: Expr) -> Self {
        match operand {
            Self::Number(n) => Self::Number(-n),
            operand => Self::mul(Self::Number(rational(-1)), operand),
        }
    }

    /// Subtracts `rhs` from `lhs`, returning the simplified `lhs + (-1 * rhs)`.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        simplify(&Self::add(lhs, Self::neg(rhs)))
    }

    /// Divides `numerator` by `denominator`.
    ///
    /// Trivial quotients short-circuit: `n/1 = n`, `0/d = 0`, `a/a = 1`, and a
    /// quotient of two numbers divides exactly. Everything else becomes the
    /// simplified `numerator * denominator^(-1)`.
    ///
    /// # Panics
    ///
    /// Panics on an exact division by the number zero.
    pub fn div(numerator: Expr, denominator: Expr) -> Self {
        if denominator.is_one() {
            return numerator;
        }
        if numerator.is_zero() {
            return Self::Number(rational(0));
        }
        if numerator == denominator {
            return Self::Number(rational(1));
        }
        if let (Self::Number(n), Self::Number(d)) = (&numerator, &denominator) {
            return Self::Number(Rational::from(n / d));
        }

        let inverse = Self::pow(denominator, Self::Number(rational(-1)));
        simplify(&Self::mul(numerator, inverse))
    }

    /// If the expression is a [`Expr::Number`], returns a reference to the contained
    /// rational.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Symbol`], returns the contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is the number zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map(|n| *n == 0).unwrap_or(false)
    }

    /// Returns true if the expression is the number one.
    pub fn is_one(&self) -> bool {
        self.as_number().map(|n| *n == 1).unwrap_or(false)
    }

    /// Returns the name of some symbol occurring in the expression, or `None` if the
    /// tree is symbol-free. Variable names carried by deferred nodes do not count;
    /// only [`Expr::Symbol`] leaves do.
    pub fn free_symbol(&self) -> Option<&str> {
        self.post_order_iter().find_map(|node| node.as_symbol())
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right
    /// post-order (i.e. depth-first), without recursing.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}
