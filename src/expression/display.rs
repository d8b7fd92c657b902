use std::fmt;

use crate::expression::ast::Expression;
use crate::operator::Operator;

/// A left operand is wrapped when it binds looser than its parent, and a power
/// on the left of another power is always wrapped.
pub(crate) fn needs_left_parens(parent: Operator, child: &Expression) -> bool {
    match child.operator() {
        Some(inner) => {
            inner.precedence() > parent.precedence()
                || (inner == Operator::Pow && parent == Operator::Pow)
        }
        None => false,
    }
}

/// A right operand is wrapped when it binds looser than or as loose as its parent.
pub(crate) fn needs_right_parens(parent: Operator, child: &Expression) -> bool {
    child
        .operator()
        .is_some_and(|inner| inner.precedence() >= parent.precedence())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf(n) => write!(f, "{}", n),
                Expression::Node(node) => {
                    let op = node.operator();
                    write_with_parens(f, node.left(), needs_left_parens(op, node.left()))?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, node.right(), needs_right_parens(op, node.right()))
                }
            }
        }

        fmt_expression(f, self)
    }
}
