//! The recoverable failure value produced when no rewrite rule matches.

use std::fmt;

/// No derivative / antiderivative rule matched the shape of an expression.
///
/// This is the *expected* failure class of [`differentiate`](crate::differentiate)
/// and [`integrate`](crate::integrate): the engines are syntax-directed and only
/// cover a fixed set of shapes, so running off the edge of the rule table is a
/// normal outcome that every caller must check. It is distinct from the fatal
/// class (malformed literals, evaluating a tree with a free symbol), which
/// panics instead.
///
/// The simplifier reacts to this value by keeping the symbolic
/// [`Diff`](crate::Expr::Diff) / [`Integral`](crate::Expr::Integral) node in
/// place of a concrete result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// Differentiation of a power whose base is not the variable itself or whose
    /// exponent is not numeric. The general power rule is not implemented.
    GeneralPowerRule,

    /// Integration of a power whose base is not the variable of integration or
    /// whose exponent is not numeric.
    PowerIntegration,

    /// Integration of a product where neither factor is a plain numeric
    /// constant. Integration by parts is not implemented.
    ProductIntegration,

    /// Integration of a function application whose argument is not exactly the
    /// variable of integration. There is no chain rule for integration.
    FunctionArgument,

    /// A deferred `Diff` / `Integral` node was passed directly to the
    /// differentiator or integrator. Only the simplifier forces those nodes.
    DeferredOperand,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneralPowerRule => {
                write!(f, "power rule for general expressions not implemented")
            },
            Self::PowerIntegration => {
                write!(f, "can only integrate a power of the integration variable with a numeric exponent")
            },
            Self::ProductIntegration => {
                write!(f, "can only integrate a product when one factor is a numeric constant")
            },
            Self::FunctionArgument => {
                write!(f, "can only integrate a function applied directly to the integration variable")
            },
            Self::DeferredOperand => {
                write!(f, "deferred derivative / integral nodes are only forced by the simplifier")
            },
        }
    }
}

impl std::error::Error for Unresolved {}
