//! Soil source code parser
//!
//! This module transforms Soil source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token model (kinds, locations, predefined type names)
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split into `statements` and `expressions`
//! - [`ast`]: AST node definitions and the binary operator table
//!
//! # Supported Language
//!
//! - Declarations: `let` (immutable) and `var` (mutable), with an optional
//!   `: Type` annotation and a required `= expression` initializer
//! - Expressions: integer, string and boolean literals, variable references,
//!   and the binary operators `+ - * / %`
//! - Comments: `// line` and `/* block */` (not nested)
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use expressions::MAX_EXPRESSION_DEPTH;
