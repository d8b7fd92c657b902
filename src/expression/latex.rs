use crate::expression::ast::Expression;
use crate::expression::display::{needs_left_parens, needs_right_parens};
use crate::operator::Operator;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division; a fraction needs no parentheses of its own
    ///   except as the base of a power
    /// - Powers put the exponent in braces
    pub fn to_latex(&self) -> String {
        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn operand(parent: Operator, child: &Expression, need_parens: bool) -> String {
            let rendered = fmt(child);
            let is_fraction = child.operator() == Some(Operator::Div);
            if need_parens && !(is_fraction && parent != Operator::Pow) {
                wrap_parens(rendered)
            } else {
                rendered
            }
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Leaf(n) => n.to_string(),
                Expression::Node(node) => {
                    let op = node.operator();
                    let (l, r) = (node.left(), node.right());
                    match op {
                        Operator::Div => format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r)),
                        Operator::Pow => {
                            let ls = operand(op, l, needs_left_parens(op, l));
                            format!("{{{}}}^{{{}}}", ls, fmt(r))
                        }
                        Operator::Add | Operator::Sub | Operator::Mul => {
                            let ls = operand(op, l, needs_left_parens(op, l));
                            let rs = operand(op, r, needs_right_parens(op, r));
                            let symbol = if op == Operator::Mul {
                                "\\cdot".to_string()
                            } else {
                                op.to_string()
                            };
                            format!("{} {} {}", ls, symbol, rs)
                        }
                    }
                }
            }
        }

        fmt(self)
    }
}
