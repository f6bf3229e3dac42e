//! Syntax frontend for the minic C subset: lexer, parser, AST, diagnostics.
//!
//! The supported grammar is deliberately tiny: a single `main` function
//! containing `return` statements, expression statements, and `int`
//! declarations, with expressions built from numbers, identifiers, binary
//! `+` / `*`, and assignment.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name
//!   resolution, type checking, or code generation.
//!
//! ## Examples
//! ```rust
//! use minic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int main() { return 4; }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
