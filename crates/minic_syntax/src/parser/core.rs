/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` method,
/// including the farthest-progress error selection applied when every
/// grammar alternative has failed.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
///
/// Parser state.
///
/// ## Notes
/// - The parser only reads the token slice; recognizers thread an explicit
///   index instead of mutating a shared cursor, so backtracking is expressed
///   purely through control return.
/// - `errors` collects one candidate error per speculative rule failure and
///   lives for exactly one `parse()` call.
pub struct Parser<'a> {
    tokens: &'a [Token],
    errors: Vec<(CompileError, usize)>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `crate::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`MainFunction`].
    ///
    /// ## Errors
    /// Returns the single [`CompileError`] that reflects the deepest partial
    /// match if parsing fails, or an "unexpected token" error if tokens
    /// remain after a successful match.
    pub fn parse(mut self) -> Result<MainFunction, CompileError> {
        match self.main_function(0) {
            Some((node, index)) => {
                if index < self.tokens.len() {
                    Err(self.make_error("unexpected token", index, ErrorStyle::At))
                } else {
                    Ok(node)
                }
            }
            None => Err(self.best_error()),
        }
    }

    /// Select the recorded error with the greatest failure index. Among
    /// errors at the same index, the one recorded latest wins, since later
    /// attempts benefited from more context.
    fn best_error(&mut self) -> CompileError {
        std::mem::take(&mut self.errors)
            .into_iter()
            .enumerate()
            .max_by_key(|&(order, (_, index))| (index, order))
            .map(|(_, (error, _))| error)
            .unwrap_or_else(|| {
                CompileError::syntax("expected main function".to_string(), Span::default())
            })
    }
}
