use std::sync::Arc;

use log::trace;

use crate::expression::ast::{Expression, Node};
use crate::expression::errors::ExpressionError;
use crate::operator::Operator;

impl Expression {
    /// Apply `op` to two expressions, computing the value of the new node.
    ///
    /// # Errors
    ///
    /// Returns an error when the operator's validity guard rejects the operand
    /// values or the result is not rational.
    pub fn combine(
        op: Operator,
        left: impl Into<Arc<Expression>>,
        right: impl Into<Arc<Expression>>,
    ) -> Result<Expression, ExpressionError> {
        let left = left.into();
        let right = right.into();
        Self::try_combine(op, &left, &right).ok_or_else(|| ExpressionError::InvalidOperation {
            op,
            left: left.value().clone(),
            right: right.value().clone(),
        })
    }

    /// Same as [`Expression::combine`], but reports an invalid operation as `None`
    pub fn try_combine(
        op: Operator,
        left: &Arc<Expression>,
        right: &Arc<Expression>,
    ) -> Option<Expression> {
        let Some(value) = op.apply(left.value(), right.value()) else {
            trace!(
                "Skipping {} {} {}: operation not valid",
                left.value(),
                op,
                right.value()
            );
            return None;
        };

        Some(Expression::Node(Node {
            op,
            left: Arc::clone(left),
            right: Arc::clone(right),
            value,
        }))
    }
}
