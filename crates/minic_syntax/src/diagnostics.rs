//! Diagnostics and error reporting for minic
//!
//! Every frontend failure is a single "syntax error" kind, distinguished only
//! by message text and source position. Errors carry a labeled span and
//! render through miette once the caller attaches source code.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(minic::syntax_error))]
pub struct CompileError {
    /// Fully rendered, user-facing message
    pub message: String,
    #[label("here")]
    pub span: SourceSpan,
}

impl CompileError {
    /// Construct a syntax error covering `span`.
    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span: SourceSpan::new(span.start.into(), span.end.saturating_sub(span.start)),
        }
    }
}

/// Render a message template against a token's displayed text.
///
/// Every `{}` in `template` is replaced with the token's source spelling, and
/// the resulting error points at the token's span.
pub fn token_error(template: &str, token: &Token) -> CompileError {
    CompileError::syntax(template.replace("{}", &token.to_string()), token.span)
}
