//! A small symbolic computation kernel over exact rational arithmetic.
//!
//! Expressions are immutable trees built from rational numbers, named symbols,
//! the binary operators `+`, `*` and `^`, the elementary functions `sin`,
//! `cos`, `exp` and `log`, and deferred derivative / integral nodes. All
//! numeric leaves are exact [`rug::Rational`] values, so folding `1/10 + 2/10`
//! yields exactly `3/10` with no floating-point error.
//!
//! The main entry points are:
//!
//! - [`Expr`]: constructing and inspecting expression trees.
//! - [`simplify`]: canonicalizing rewrite to a deterministic normal form, which
//!   also forces deferred [`Diff`](Expr::Diff) and [`Integral`](Expr::Integral)
//!   nodes when a rule applies.
//! - [`differentiate`] / [`integrate`]: structural calculus on trees, returning
//!   [`Unresolved`] when no rule covers the input.
//! - [`substitute`], [`evaluate`] and [`eval_numeric`]: binding symbols to
//!   values and collapsing closed trees to `f64`.
//!
//! # Example
//!
//! Differentiate `x^3 + sin(x)`, then integrate the result back:
//!
//! ```
//! use symcalc::{differentiate, integrate, simplify, Expr, Func};
//!
//! let f = Expr::add(
//!     Expr::pow(Expr::symbol("x"), Expr::number("3")),
//!     Expr::func(Func::Sin, Expr::symbol("x")),
//! );
//!
//! let df = simplify(&differentiate(&f, "x")?);
//! assert_eq!(df.to_string(), "((3 * (x ^ 2)) + cos(x))");
//!
//! let back = simplify(&integrate(&df, "x")?);
//! assert_eq!(back, simplify(&f));
//! # Ok::<(), symcalc::Unresolved>(())
//! ```
//!
//! Inputs with no applicable rule stay symbolic instead of failing:
//!
//! ```
//! use symcalc::{simplify, Expr, Func};
//!
//! let unresolved = Expr::integral(
//!     Expr::mul(Expr::symbol("x"), Expr::func(Func::Sin, Expr::symbol("x"))),
//!     "x",
//! );
//! assert_eq!(simplify(&unresolved).to_string(), "∫ (x * sin(x)) dx");
//! ```

pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod integrate;
pub mod primitive;
pub mod simplify;

pub use derivative::differentiate;
pub use error::Unresolved;
pub use eval::{eval_numeric, evaluate, substitute};
pub use expr::{Expr, Func};
pub use integrate::integrate;
pub use simplify::simplify;
