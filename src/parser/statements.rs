//! Statement parsing implementation
//!
//! Every statement is currently a declaration:
//!
//! ```text
//! statement      ::= declaration
//! declaration    ::= ("let" | "var") identifier type_annotation? "=" expression
//! type_annotation ::= ":" (type_name | identifier)
//! ```
//!
//! `let` produces [`Declaration::Value`], `var` produces
//! [`Declaration::Variable`]. Reserved words never lex as identifiers, so
//! `let true = 1` fails on the name.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        Ok(Statement::Declaration(self.parse_declaration()?))
    }

    /// Parse a `let` or `var` declaration
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let keyword = self.expect_one_of(&[TokenKind::Let, TokenKind::Var])?;
        let name = self.expect_identifier()?;

        let type_annotation = if self.match_token(TokenKind::Colon) {
            Some(self.parse_type_identifier()?)
        } else {
            None
        };

        if type_annotation.is_some() {
            self.expect_token(TokenKind::Assign)?;
        } else {
            self.expect_one_of(&[TokenKind::Colon, TokenKind::Assign])?;
        }

        let initializer = self.parse_expression()?;

        tracing::trace!(
            keyword = %keyword.lexeme,
            name = name.as_str(),
            line = keyword.location.line,
            "parsed declaration"
        );

        let binding = Binding {
            name,
            type_annotation,
            initializer,
        };

        Ok(match keyword.kind {
            TokenKind::Var => Declaration::Variable(binding),
            _ => Declaration::Value(binding),
        })
    }

    /// Parse the type name after ':'
    fn parse_type_identifier(&mut self) -> Result<TypeIdentifier, ParseError> {
        let token = self.expect_one_of(&[TokenKind::TypeIdentifier, TokenKind::Identifier])?;
        Ok(TypeIdentifier(token.lexeme))
    }
}
