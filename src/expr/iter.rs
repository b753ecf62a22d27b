use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right
/// post-order (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`]. Because it keeps its own
/// explicit stack, traversal depth is bounded by heap memory rather than the call
/// stack, which matters for deep or degenerate trees.
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in
    /// left-to-right post-order (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited
    /// expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Symbol(_) => return self.visit(),
                Expr::Add(lhs, rhs) | Expr::Mul(lhs, rhs) | Expr::Pow(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
                Expr::Func(_, inner) | Expr::Diff(inner, _) | Expr::Integral(inner, _) => {
                    if self.is_last_visited(inner) {
                        return self.visit();
                    }
                    self.stack.push(inner);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{Expr, Func};

    #[test]
    fn post_order_visits_children_first() {
        // (x + 2) * sin(y)
        let e = Expr::mul(
            Expr::add(Expr::symbol("x"), Expr::number("2")),
            Expr::func(Func::Sin, Expr::symbol("y")),
        );

        let order = e.post_order_iter()
            .map(|node| match node {
                Expr::Number(_) => "number",
                Expr::Symbol(_) => "symbol",
                Expr::Add(..) => "add",
                Expr::Mul(..) => "mul",
                Expr::Func(..) => "func",
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();

        assert_eq!(order, ["symbol", "number", "add", "symbol", "func", "mul"]);
    }

    #[test]
    fn deferred_nodes_traverse_their_inner_expression() {
        let e = Expr::diff(Expr::pow(Expr::symbol("x"), Expr::number("2")), "x");
        assert_eq!(e.post_order_iter().count(), 4);
    }
}
