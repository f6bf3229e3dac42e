/// Parse a token stream into the root [`MainFunction`] AST node.
///
/// This is the main public entrypoint for parsing. Each call owns a fresh
/// error accumulator, so independent parses never share state.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `crate::lexer`.
///
/// ## Errors
/// Returns the [`CompileError`] whose speculative parse progressed farthest
/// if no grammar alternative matched, or an "unexpected token" error if
/// tokens remain after the main function.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<MainFunction, CompileError> {
    Parser::new(tokens).parse()
}
