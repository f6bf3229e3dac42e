//! Lexer for the minic C subset
//!
//! Handles tokenization of:
//! - Keywords (`int`, `main`, `return`)
//! - Identifiers and decimal integer literals
//! - Punctuation and operators (`( ) { } ; + * =`)
//! - Whitespace and `//` / `/* */` comments (skipped)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{keyword_kind, Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::CompileError;

/// Lexer for minic source code.
///
/// Converts source text into a stream of tokens. Scanning stops at the first
/// unrecognized character; there is no recovery. The token stream carries no
/// end-of-input sentinel, since the parser treats the vector length as the
/// end of input.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or the first scan error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn push_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens
            .push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), CompileError> {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => Ok(()),
            '(' => {
                self.push_token(TokenKind::OpenParen, start);
                Ok(())
            }
            ')' => {
                self.push_token(TokenKind::CloseParen, start);
                Ok(())
            }
            '{' => {
                self.push_token(TokenKind::OpenBrace, start);
                Ok(())
            }
            '}' => {
                self.push_token(TokenKind::CloseBrace, start);
                Ok(())
            }
            ';' => {
                self.push_token(TokenKind::Semicolon, start);
                Ok(())
            }
            '+' => {
                self.push_token(TokenKind::Plus, start);
                Ok(())
            }
            '*' => {
                self.push_token(TokenKind::Star, start);
                Ok(())
            }
            '=' => {
                self.push_token(TokenKind::Equals, start);
                Ok(())
            }
            '/' => self.scan_comment(start),
            c if c.is_ascii_digit() => self.scan_number(start),
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.scan_identifier(start);
                Ok(())
            }
            c => Err(CompileError::syntax(
                format!("unrecognized character '{c}'"),
                Span::new(start, self.current_pos),
            )),
        }
    }

    // ========================================================================
    // Token scanners
    // ========================================================================

    /// Skip a `//` or `/* */` comment; a lone `/` is not a valid token here.
    fn scan_comment(&mut self, start: usize) -> Result<(), CompileError> {
        match self.peek() {
            Some('/') => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                Ok(())
            }
            Some('*') => {
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            return Ok(());
                        }
                        Some(_) => {}
                        None => {
                            return Err(CompileError::syntax(
                                "unterminated block comment".to_string(),
                                Span::new(start, self.current_pos),
                            ));
                        }
                    }
                }
            }
            _ => Err(CompileError::syntax(
                "unrecognized character '/'".to_string(),
                Span::new(start, self.current_pos),
            )),
        }
    }

    fn scan_number(&mut self, start: usize) -> Result<(), CompileError> {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        let span = Span::new(start, self.current_pos);
        let value: i64 = self.source[start..self.current_pos]
            .parse()
            .map_err(|_| CompileError::syntax("integer literal out of range".to_string(), span))?;
        self.push_token(TokenKind::Number(value), start);
        Ok(())
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            self.advance();
        }

        let lexeme = &self.source[start..self.current_pos];
        let kind = keyword_kind(lexeme).unwrap_or_else(|| TokenKind::Ident(lexeme.to_string()));
        self.push_token(kind, start);
    }
}

/// Tokenize minic source text.
///
/// ## Errors
/// Returns the first [`CompileError`] encountered while scanning.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(source).tokenize()
}
