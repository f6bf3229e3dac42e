#![forbid(unsafe_code)]
//! minic — a compiler frontend for a small subset of C
//!
//! The supported surface is a single `main` function containing `return`
//! statements, expression statements, and `int` declarations, with
//! expressions built from numbers, identifiers, binary `+` / `*`, and
//! assignment. The heavy lifting lives in the `minic_syntax` crate; this
//! crate adds the CLI and a convenience entry point.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?` / `map_err`; `.unwrap()` and
//! `.expect()` are acceptable in tests only.

pub mod cli;

pub use minic_syntax::ast;
pub use minic_syntax::diagnostics;
pub use minic_syntax::lexer;
pub use minic_syntax::parser;

use minic_syntax::ast::MainFunction;
use minic_syntax::diagnostics::CompileError;

/// Lex and parse a source string into the root AST node.
///
/// ## Errors
/// Returns the first lex error, or the parse error reflecting the deepest
/// partial match.
///
/// ## Examples
/// ```rust
/// let ast = minic::compile_source("int main() { return 4; }").unwrap();
/// assert_eq!(ast.body.len(), 1);
/// ```
pub fn compile_source(source: &str) -> Result<MainFunction, CompileError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
