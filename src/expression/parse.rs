use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::number::Number;
use crate::operator::Operator;

/// Recursive-descent parser over rendered expressions.
///
/// `+ -` and `* /` associate to the left, `^` to the right and binds tightest.
struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        self.chars.peek().copied()
    }

    fn next_operator(&mut self, allowed: &[Operator]) -> Option<Operator> {
        let (_, c) = self.peek()?;
        let op = allowed.iter().copied().find(|op| op.symbol() == c)?;
        self.chars.next();
        Some(op)
    }

    fn parse_sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_product()?;
        while let Some(op) = self.next_operator(&[Operator::Add, Operator::Sub]) {
            let right = self.parse_product()?;
            left = Expression::combine(op, left, right)?;
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_power()?;
        while let Some(op) = self.next_operator(&[Operator::Mul, Operator::Div]) {
            let right = self.parse_power()?;
            left = Expression::combine(op, left, right)?;
        }
        Ok(left)
    }

    fn parse_power(&mut self) -> Result<Expression, ExpressionError> {
        let base = self.parse_atom()?;
        if self.next_operator(&[Operator::Pow]).is_some() {
            let exponent = self.parse_power()?;
            return Expression::combine(Operator::Pow, base, exponent);
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some((_, '(')) => {
                self.chars.next();
                let inner = self.parse_sum()?;
                match self.peek() {
                    Some((_, ')')) => {
                        self.chars.next();
                        Ok(inner)
                    }
                    Some((position, found)) => {
                        Err(ExpressionError::UnexpectedCharacter { found, position })
                    }
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((_, c)) if c.is_ascii_digit() => self.parse_number(),
            Some((position, found)) => Err(ExpressionError::UnexpectedCharacter { found, position }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let mut literal = String::new();
        while let Some((_, c)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            literal.push(c);
        }
        let value = literal
            .parse::<i64>()
            .map_err(|_| ExpressionError::NumberOutOfRange(literal.clone()))?;
        Ok(Expression::Leaf(Number::from_integer(value)))
    }
}

impl Expression {
    /// Parse an expression written with integers, `+ - * / ^` and parentheses.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed input, or when a subexpression is not a
    /// valid operation (for example a division by zero).
    pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", input);

        let mut parser = Parser::new(input);
        let expr = parser.parse_sum()?;
        if let Some((position, found)) = parser.peek() {
            return Err(ExpressionError::UnexpectedCharacter { found, position });
        }
        Ok(expr)
    }
}
