//! # Introduction
//!
//! Soil is a miniature experimental language. This crate is its front end:
//! it turns source text made of variable declarations and arithmetic/literal
//! expressions into an immutable AST, and renders that AST back to canonical
//! source text.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Printer → Source
//! ```
//!
//! 1. [`parser::lexer`]: tokenises the source.
//! 2. [`parser::parse`]: recursive descent over the tokens, with precedence
//!    climbing for binary expressions.
//! 3. [`parser::ast`]: closed, structurally comparable node types.
//! 4. [`printer`]: canonical rendering; `print(parse(t)) == t` for canonical `t`.
//!
//! Every entry point is a pure function of its input and is safe to call from
//! any number of threads at once.
//!
//! ```
//! let unit = soil::parse("let finished: Int = 1 + 2 * otherValue").unwrap();
//! assert_eq!(soil::print(&unit), "let finished: Int = 1 + 2 * otherValue");
//! ```

pub mod parser;
pub mod printer;

pub use parser::ast::{
    Associativity, BinaryOperator, Binding, CompilationUnit, Declaration, Expression, Identifier,
    Literal, Statement, TypeIdentifier,
};
pub use parser::lexer::{tokenize, LexError};
pub use parser::parse::{parse, parse_expression, ParseError};
pub use parser::token::{PredefinedType, SourceLocation, Token, TokenKind};
pub use parser::MAX_EXPRESSION_DEPTH;
pub use printer::{print, Printable};
