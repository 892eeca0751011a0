//! Token model shared by the lexer and the parser
//!
//! Keywords, boolean literals and the predefined type names each get their own
//! [`TokenKind`], so the parser never compares lexemes against reserved words.

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    /// Byte offset into the source text
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Every kind of lexical unit the language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Let,
    Var,

    // Punctuation
    Colon,  // :
    Assign, // =

    // Names
    Identifier,
    TypeIdentifier, // one of the predefined type names

    // Literals
    IntLiteral,
    StringLiteral,
    True,
    False,

    // Arithmetic operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %

    EndOfInput,
}

impl TokenKind {
    /// Resolve a reserved word to its token kind.
    ///
    /// Returns `None` for anything that should lex as a plain identifier.
    pub fn reserved(word: &str) -> Option<TokenKind> {
        match word {
            "let" => Some(TokenKind::Let),
            "var" => Some(TokenKind::Var),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => PredefinedType::from_name(word).map(|_| TokenKind::TypeIdentifier),
        }
    }

    /// Whether a token of this kind can start a primary expression.
    pub fn starts_primary(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Identifier
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::Var => write!(f, "'var'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::TypeIdentifier => write!(f, "type name"),
            TokenKind::IntLiteral => write!(f, "integer literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A classified lexical unit.
///
/// `lexeme` is the source text the token was built from, except for string
/// literals where it holds the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn end_of_input(location: SourceLocation) -> Self {
        Self::new(TokenKind::EndOfInput, "", location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::TypeIdentifier => write!(f, "type name '{}'", self.lexeme),
            TokenKind::IntLiteral => write!(f, "integer literal {}", self.lexeme),
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Type names built into the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    Float,
    Double,
    Bool,
    String,
}

impl PredefinedType {
    pub fn from_name(name: &str) -> Option<PredefinedType> {
        match name {
            "Char" => Some(PredefinedType::Char),
            "Int8" => Some(PredefinedType::Int8),
            "Int16" => Some(PredefinedType::Int16),
            "Int32" => Some(PredefinedType::Int32),
            "Int64" => Some(PredefinedType::Int64),
            "Int" => Some(PredefinedType::Int),
            "Float" => Some(PredefinedType::Float),
            "Double" => Some(PredefinedType::Double),
            "Bool" => Some(PredefinedType::Bool),
            "String" => Some(PredefinedType::String),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PredefinedType::Char => "Char",
            PredefinedType::Int8 => "Int8",
            PredefinedType::Int16 => "Int16",
            PredefinedType::Int32 => "Int32",
            PredefinedType::Int64 => "Int64",
            PredefinedType::Int => "Int",
            PredefinedType::Float => "Float",
            PredefinedType::Double => "Double",
            PredefinedType::Bool => "Bool",
            PredefinedType::String => "String",
        }
    }
}

impl fmt::Display for PredefinedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
