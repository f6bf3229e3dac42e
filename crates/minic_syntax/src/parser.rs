//! Parser for the minic C subset
//!
//! Converts a token stream into an AST. The parser is a hand-written
//! alternation of grammar-rule recognizers with an embedded shift-reduce
//! expression engine.
//!
//! Each recognizer method corresponds to one non-terminal. It tries to match
//! a grammar rule starting at a given token index and returns
//! `Some((node, next_index))` on success, where `next_index` is one past the
//! last token consumed, or `None` on failure, having recorded a candidate
//! error. If the whole parse fails, the candidate error that progressed
//! farthest through the token stream is surfaced (later-recorded errors win
//! ties).
//!
//! ## Examples
//!
//! ```rust
//! use minic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int main() { int x; x = 1 + 2; }").unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.body.len(), 2);
//! ```

use crate::ast::{BinaryOp, Expr, MainFunction, Span, Stmt};
use crate::diagnostics::{token_error, CompileError};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
