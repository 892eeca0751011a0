//! Lexer (tokenizer) for Soil source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Whitespace, `//` line comments and non-nesting `/* */` block comments are
//! skipped. The stream always ends with exactly one
//! [`TokenKind::EndOfInput`] token.

use super::token::{SourceLocation, Token, TokenKind};
use thiserror::Error;

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Lexer error at {location}: unexpected character '{character}'")]
    UnexpectedCharacter {
        character: char,
        location: SourceLocation,
    },

    #[error("Lexer error at {location}: unterminated string literal")]
    UnterminatedString { location: SourceLocation },

    #[error("Lexer error at {location}: malformed number '{lexeme}'")]
    MalformedNumber {
        lexeme: String,
        location: SourceLocation,
    },

    #[error("Lexer error at {location}: integer literal {lexeme} is out of range")]
    IntegerOutOfRange {
        lexeme: String,
        location: SourceLocation,
    },

    #[error("Lexer error at {location}: unterminated block comment")]
    UnterminatedComment { location: SourceLocation },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnexpectedCharacter { location, .. }
            | LexError::UnterminatedString { location }
            | LexError::MalformedNumber { location, .. }
            | LexError::IntegerOutOfRange { location, .. }
            | LexError::UnterminatedComment { location } => *location,
        }
    }
}

/// Tokenize `source` in a single left-to-right pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for Soil source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => {
                    tokens.push(Token::end_of_input(self.current_location()));
                    break;
                }
            }
        }

        tracing::debug!(tokens = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Get next token, or `None` once the input is exhausted
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(None);
        };

        let token = match ch {
            '"' => self.string_literal(loc),

            '0'..='9' => self.number_literal(ch, loc),

            c if is_identifier_start(c) => Ok(self.identifier_or_keyword(ch, loc)),

            ':' => Ok(Token::new(TokenKind::Colon, ":", loc)),
            '=' => Ok(Token::new(TokenKind::Assign, "=", loc)),
            '+' => Ok(Token::new(TokenKind::Plus, "+", loc)),
            '-' => Ok(Token::new(TokenKind::Minus, "-", loc)),
            '*' => Ok(Token::new(TokenKind::Star, "*", loc)),
            '/' => Ok(Token::new(TokenKind::Slash, "/", loc)),
            '%' => Ok(Token::new(TokenKind::Percent, "%", loc)),

            _ => Err(LexError::UnexpectedCharacter {
                character: ch,
                location: loc,
            }),
        }?;

        Ok(Some(token))
    }

    /// Parse string literal; the opening quote is already consumed.
    ///
    /// Content is captured verbatim. A backslash keeps the next character from
    /// closing the literal but is itself kept in the value.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance(); // consume closing quote
                    return Ok(Token::new(TokenKind::StringLiteral, string, loc));
                }
                '\n' | '\r' => break,
                '\\' => {
                    string.push(ch);
                    self.advance();
                    match self.peek() {
                        Some('\n') | Some('\r') | None => break,
                        Some(escaped) => {
                            string.push(escaped);
                            self.advance();
                        }
                    }
                }
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { location: loc })
    }

    /// Parse integer literal: a maximal run of ASCII digits
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // `10x` is neither a number nor an identifier
        if self.peek().is_some_and(is_identifier_continue) {
            while let Some(ch) = self.peek() {
                if !is_identifier_continue(ch) {
                    break;
                }
                num_str.push(ch);
                self.advance();
            }
            return Err(LexError::MalformedNumber {
                lexeme: num_str,
                location: loc,
            });
        }

        if num_str.parse::<i64>().is_err() {
            return Err(LexError::IntegerOutOfRange {
                lexeme: num_str,
                location: loc,
            });
        }

        Ok(Token::new(TokenKind::IntLiteral, num_str, loc))
    }

    /// Parse identifier or reserved word
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if is_identifier_continue(ch) {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::reserved(&ident).unwrap_or(TokenKind::Identifier);
        Token::new(kind, ident, loc)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if is_line_terminator(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Skip multi-line comment (/* ... */), which does not nest
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::UnterminatedComment {
            location: start_loc,
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        self.offset += ch.len_utf8();

        // `\r\n` counts once, on the `\n`
        let line_break = match ch {
            '\r' => self.peek() != Some('\n'),
            c => is_line_terminator(c),
        };

        if line_break {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.offset, self.line, self.column)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_declaration() {
        let tokens = tokenize("let x: Int = 10").unwrap();

        assert!(tokens[0].is(TokenKind::Let));
        assert!(tokens[1].is(TokenKind::Identifier) && tokens[1].lexeme == "x");
        assert!(tokens[2].is(TokenKind::Colon));
        assert!(tokens[3].is(TokenKind::TypeIdentifier) && tokens[3].lexeme == "Int");
        assert!(tokens[4].is(TokenKind::Assign));
        assert!(tokens[5].is(TokenKind::IntLiteral) && tokens[5].lexeme == "10");
        assert!(tokens[6].is(TokenKind::EndOfInput));
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / %"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_reserved_words_are_not_identifiers() {
        assert_eq!(
            kinds("var true false Bool letter"),
            vec![
                TokenKind::Var,
                TokenKind::True,
                TokenKind::False,
                TokenKind::TypeIdentifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("let x = 1 // comment\nvar /* block\ncomment */ y = 2").unwrap();
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();

        assert_eq!(lexemes, vec!["let", "x", "=", "1", "var", "y", "=", "2", ""]);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        // The first `*/` closes the comment; the rest is ordinary input.
        assert_eq!(
            kinds("/* outer /* inner */ still */"),
            vec![
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("let x = 1 /* never closed").unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment { location: SourceLocation::new(10, 1, 11) });
    }

    #[test]
    fn test_only_comments_yield_end_of_input() {
        assert_eq!(kinds("// nothing here"), vec![TokenKind::EndOfInput]);
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_string_literal_is_verbatim() {
        let tokens = tokenize(r#""John Doe" "a\"b\n""#).unwrap();

        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "John Doe");
        assert_eq!(tokens[1].lexeme, r#"a\"b\n"#);
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("let s = \"open").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { location: SourceLocation::new(8, 1, 9) });

        let err = tokenize("let s = \"broken\nline\"").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_malformed_number() {
        let err = tokenize("let x = 10x").unwrap_err();
        assert_eq!(
            err,
            LexError::MalformedNumber {
                lexeme: "10x".to_string(),
                location: SourceLocation::new(8, 1, 9),
            }
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert!(matches!(err, LexError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("let x = 1;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: ';',
                location: SourceLocation::new(9, 1, 10),
            }
        );
    }

    #[test]
    fn test_locations_track_lines() {
        let tokens = tokenize("let a = 1\n  var b = 2").unwrap();

        assert_eq!(tokens[4].location, SourceLocation::new(12, 2, 3));
        assert_eq!(tokens[5].location, SourceLocation::new(16, 2, 7));
    }

    #[test]
    fn test_line_comment_ends_at_any_line_terminator() {
        let expected = vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::EndOfInput,
        ];

        for terminator in ["\n", "\r", "\r\n", "\u{2028}", "\u{2029}"] {
            let source = format!("let x = 1 //c{terminator}var y = 2");
            assert_eq!(kinds(&source), expected, "{terminator:?}");
        }
    }

    #[test]
    fn test_carriage_return_ends_string() {
        let err = tokenize("\"abc\rdef\"").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { location: SourceLocation::new(0, 1, 1) });
    }

    #[test]
    fn test_every_line_terminator_advances_line() {
        for terminator in ["\n", "\r", "\r\n", "\u{2028}", "\u{2029}"] {
            let source = format!("let a = 1{terminator}var b = 2");
            let tokens = tokenize(&source).unwrap();

            let var = &tokens[4];
            assert!(var.is(TokenKind::Var));
            assert_eq!((var.location.line, var.location.column), (2, 1), "{terminator:?}");
            assert_eq!(var.location.offset, 9 + terminator.len(), "{terminator:?}");
        }
    }

    #[test]
    fn test_line_tracking_after_comment_with_lone_carriage_return() {
        let err = tokenize("// note\rlet x = ;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: ';',
                location: SourceLocation::new(16, 2, 9),
            }
        );
    }

    #[test]
    fn test_end_of_input_appears_once() {
        let tokens = tokenize("let x = 1   \n").unwrap();
        let ends = tokens.iter().filter(|t| t.is(TokenKind::EndOfInput)).count();

        assert_eq!(ends, 1);
        assert!(tokens.last().is_some_and(|t| t.is(TokenKind::EndOfInput)));
        assert_eq!(tokens.last().map(|t| t.location), Some(SourceLocation::new(13, 2, 1)));
    }
}
