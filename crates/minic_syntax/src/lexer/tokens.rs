//! Token types for the minic lexer.
//!
//! The token vocabulary is a closed set: the keywords `int`, `main`, and
//! `return`, the punctuation `( ) { } ;`, the operators `+ * =`, and the
//! data-bearing identifier and number kinds.
//!
//! ## Notes
//! - `TokenKind::matches` compares data-bearing kinds by variant only, so a
//!   placeholder like `TokenKind::Number(0)` can express "any number" in
//!   lookahead checks.
//! - `Display` renders the token's source spelling; error messages quote it.

use crate::ast::Span;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keywords ==========
    IntKw,
    Main,
    Return,

    // ========== Punctuation ==========
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,

    // ========== Operators ==========
    Plus,
    Star,
    Equals,

    // ========== Identifiers and literals ==========
    Ident(String),
    Number(i64),
}

impl TokenKind {
    /// Return `true` if `other` is the same kind of token.
    ///
    /// ## Notes
    /// - For data-bearing kinds (identifiers/numbers), the variant is compared
    ///   and the payload value is ignored.
    pub fn matches(&self, other: &TokenKind) -> bool {
        match (self, other) {
            (TokenKind::Ident(_), TokenKind::Ident(_))
            | (TokenKind::Number(_), TokenKind::Number(_)) => true,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::IntKw => write!(f, "int"),
            TokenKind::Main => write!(f, "main"),
            TokenKind::Return => write!(f, "return"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::OpenBrace => write!(f, "{{"),
            TokenKind::CloseBrace => write!(f, "}}"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Equals => write!(f, "="),
            TokenKind::Ident(name) => write!(f, "{name}"),
            TokenKind::Number(value) => write!(f, "{value}"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Resolve an identifier spelling to a keyword kind, if reserved.
pub fn keyword_kind(name: &str) -> Option<TokenKind> {
    match name {
        "int" => Some(TokenKind::IntKw),
        "main" => Some(TokenKind::Main),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}
