//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the public parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with one token of lookahead
//! and no backtracking:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing declarations and type annotations
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The first error aborts the parse. No partial tree is returned and no
//! recovery is attempted.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer};
use crate::parser::token::{SourceLocation, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(
        "Parse error at {}: expected {}, found {found}",
        token_location(.found),
        describe_expected(.expected)
    )]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: Token,
    },

    #[error(
        "Parse error at {location}: unexpected end of input, expected {}",
        describe_expected(.expected)
    )]
    UnexpectedEndOfInput {
        expected: Vec<TokenKind>,
        location: SourceLocation,
    },

    #[error("Parse error at {}: expected an expression, found {found}", token_location(.found))]
    MissingExpression { found: Token },

    #[error("Parse error at {location}: expression nests deeper than {limit} operators")]
    ExpressionTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex(err) => err.location(),
            ParseError::UnexpectedToken { found, .. } => found.location,
            ParseError::UnexpectedEndOfInput { location, .. } => *location,
            ParseError::MissingExpression { found } => found.location,
            ParseError::ExpressionTooDeep { location, .. } => *location,
        }
    }
}

fn token_location(token: &Token) -> SourceLocation {
    token.location
}

/// Render an expected set as "a", "a or b", "a, b or c".
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(|kind| kind.to_string()).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}

/// Parse a complete source text into a [`CompilationUnit`].
pub fn parse(source: &str) -> Result<CompilationUnit, ParseError> {
    let result = Parser::new(source).and_then(|mut parser| parser.parse_compilation_unit());
    match &result {
        Ok(unit) => tracing::debug!(statements = unit.statements.len(), "parsed compilation unit"),
        Err(err) => tracing::debug!(error = %err, "parse failed"),
    }
    result
}

/// Parse a source text holding exactly one expression.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_standalone_expression()
}

/// Recursive descent parser for Soil
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Build a parser over an existing token stream.
    ///
    /// An `EndOfInput` token is appended if the stream does not end with one.
    ///
    /// The stream is not trusted to come from the lexer: each `IntLiteral`
    /// lexeme is parsed again when its primary is built, and one outside the
    /// `i64` range fails with `ParseError::Lex(LexError::IntegerOutOfRange)`.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfInput)) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::end_of_input(location));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire input: `Statement* EndOfInput`
    pub fn parse_compilation_unit(&mut self) -> Result<CompilationUnit, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if !self.check(TokenKind::Let) && !self.check(TokenKind::Var) {
                return Err(self.unexpected(&[TokenKind::Let, TokenKind::Var, TokenKind::EndOfInput]));
            }
            statements.push(self.parse_statement()?);
        }

        Ok(CompilationUnit::new(statements))
    }

    /// Parse a single expression that must span the whole input
    pub fn parse_standalone_expression(&mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_token(TokenKind::EndOfInput)?;
        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// The most recently consumed token, or the current one before anything is consumed
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Error for the current token when one of `expected` was required
    pub(crate) fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        if self.is_at_end() && !expected.contains(&TokenKind::EndOfInput) {
            ParseError::UnexpectedEndOfInput {
                expected: expected.to_vec(),
                location: self.current_location(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_vec(),
                found: self.peek().clone(),
            }
        }
    }

    pub(crate) fn expect_one_of(&mut self, expected: &[TokenKind]) -> Result<Token, ParseError> {
        if expected.contains(&self.peek().kind) {
            let token = self.peek().clone();
            self.advance();
            Ok(token)
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_token(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.expect_one_of(&[kind])
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect_token(TokenKind::Identifier)?;
        Ok(Identifier(token.lexeme))
    }
}
