use std::sync::Arc;

use crate::number::Number;
use crate::operator::Operator;

/// An immutable expression tree built from input digits
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Leaf(Number),
    Node(Node),
}

/// An operator applied to two sub-expressions, with its value computed once
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) op: Operator,
    pub(crate) left: Arc<Expression>,
    pub(crate) right: Arc<Expression>,
    pub(crate) value: Number,
}

impl Node {
    pub fn operator(&self) -> Operator {
        self.op
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Expression {
    pub fn leaf(digit: u32) -> Self {
        Expression::Leaf(Number::from_digit(digit))
    }

    pub fn value(&self) -> &Number {
        match self {
            Expression::Leaf(n) => n,
            Expression::Node(node) => &node.value,
        }
    }

    /// The root operator, `None` for a leaf
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Leaf(_) => None,
            Expression::Node(node) => Some(node.op),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Node(node) => node.left.leaf_count() + node.right.leaf_count(),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 0,
            Expression::Node(node) => 1 + node.left.node_count() + node.right.node_count(),
        }
    }

    /// Leaf values from left to right
    pub fn leaves(&self) -> Vec<&Number> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Leaf(n) => out.push(n),
                Expression::Node(node) => {
                    stack.push(&node.right);
                    stack.push(&node.left);
                }
            }
        }
        out
    }
}
