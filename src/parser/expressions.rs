//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing for
//! binary operators and a single-token dispatch for primaries.
//!
//! # Supported Expressions
//!
//! - Literals: integers, strings, `true`/`false`
//! - Variable references
//! - Binary operators: `+ - * / %`
//!
//! # Precedence
//!
//! Precedence and associativity come from the operator table in
//! [`crate::parser::ast`]; `* / %` bind tighter than `+ -` and every tier is
//! left associative, so `a + b * c` is `a + (b * c)` and `a - b - c` is
//! `(a - b) - c`.
//!
//! # Depth limit
//!
//! A parsed expression is at most [`MAX_EXPRESSION_DEPTH`] binary operators
//! deep. The derived `Drop`, `PartialEq`, `Hash`, `Clone` and `Debug` impls of
//! [`Expression`] recurse once per level, so deeper input is rejected with
//! [`ParseError::ExpressionTooDeep`] instead of building a tree that would
//! exhaust the stack later.

use crate::parser::ast::*;
use crate::parser::lexer::LexError;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

/// Lowest bound passed to the climbing loop; admits every operator.
const MIN_PRECEDENCE: u8 = 0;

/// Deepest binary-expression nesting the parser will build.
pub const MAX_EXPRESSION_DEPTH: usize = 1024;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let (expr, _depth) = self.parse_binary(MIN_PRECEDENCE)?;
        Ok(expr)
    }

    /// Parse a primary followed by any operators binding at least as tightly
    /// as `min_precedence`.
    ///
    /// Returns the expression together with its binary nesting depth.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<(Expression, usize), ParseError> {
        let mut left = self.parse_primary()?;
        let mut depth = 0;

        while let Some(operator) = BinaryOperator::from_token(self.peek().kind) {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            let location = self.current_location();
            self.advance();

            let next_min = match operator.associativity() {
                Associativity::Left => precedence + 1,
                Associativity::Right => precedence,
            };
            let (right, right_depth) = self.parse_binary(next_min)?;

            depth = 1 + depth.max(right_depth);
            if depth > MAX_EXPRESSION_DEPTH {
                return Err(ParseError::ExpressionTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                    location,
                });
            }

            left = Expression::binary(left, operator, right);
        }

        Ok((left, depth))
    }

    /// Parse primary expressions (literals, variable references)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let token = self.peek().clone();

        let expr = match token.kind {
            TokenKind::IntLiteral => {
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    LexError::IntegerOutOfRange {
                        lexeme: token.lexeme.clone(),
                        location: token.location,
                    }
                })?;
                Expression::Constant(Literal::Int(value))
            }
            TokenKind::StringLiteral => Expression::Constant(Literal::String(token.lexeme)),
            TokenKind::True => Expression::Constant(Literal::Bool(true)),
            TokenKind::False => Expression::Constant(Literal::Bool(false)),
            TokenKind::Identifier => Expression::Variable(Identifier(token.lexeme)),
            _ => return Err(ParseError::MissingExpression { found: token }),
        };

        self.advance();
        Ok(expr)
    }
}
