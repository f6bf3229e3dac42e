/// Token lookahead and error recording.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Ordered-prefix lookahead over the remaining tokens (`match_tokens`)
/// - Error recording with the AT / GOT / AFTER message styles
///
/// Message styles, by example:
/// - AT:    "expected semicolon at '}'"    - a token is wrongly present
/// - GOT:   "expected semicolon, got '}'"  - a token of the wrong kind was found
/// - AFTER: "expected semicolon after '4'" - a token should be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorStyle {
    At,
    Got,
    After,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Check whether the tokens starting at `index` match `expected`, in
    /// order. Returns the number of tokens matched if every position
    /// satisfies its expected kind, or `None` on any mismatch or if too few
    /// tokens remain.
    fn match_tokens(&self, index: usize, expected: &[TokenKind]) -> Option<usize> {
        let rest = &self.tokens[index.min(self.tokens.len())..];
        if rest.len() < expected.len() {
            return None;
        }
        if expected
            .iter()
            .zip(rest)
            .all(|(kind, token)| kind.matches(&token.kind))
        {
            Some(expected.len())
        } else {
            None
        }
    }

    /// Check for a single token kind at `index`.
    fn match_token(&self, index: usize, expected: &TokenKind) -> bool {
        self.match_tokens(index, std::slice::from_ref(expected))
            .is_some()
    }

    /// Offset of the first position where `expected` stops matching, used to
    /// point errors at the exact divergent token of a fixed prologue.
    fn divergence_offset(&self, index: usize, expected: &[TokenKind]) -> usize {
        expected
            .iter()
            .enumerate()
            .find(|&(offset, kind)| {
                self.tokens
                    .get(index + offset)
                    .map_or(true, |token| !kind.matches(&token.kind))
            })
            .map(|(offset, _)| offset)
            .unwrap_or(expected.len())
    }

    // ========================================================================
    // Error recording
    // ========================================================================

    /// Render a candidate error at `index` and append it to the accumulator
    /// for this parse. Returns `None` so recognizers can fail with
    /// `return self.record_error(...)`.
    fn record_error<T>(&mut self, message: &str, index: usize, style: ErrorStyle) -> Option<T> {
        let error = self.make_error(message, index, style);
        self.errors.push((error, index));
        None
    }

    /// Render an error message in the given style, clamping the index and
    /// style to the token stream:
    /// - an empty stream gets a generic "at beginning of source" message;
    /// - an index at or past the end is forced to AFTER, anchored at the
    ///   last token;
    /// - AFTER at index zero is forced to GOT, since no token precedes it.
    fn make_error(&self, message: &str, index: usize, style: ErrorStyle) -> CompileError {
        if self.tokens.is_empty() {
            return CompileError::syntax(format!("{message} at beginning of source"), Span::default());
        }

        let (index, style) = if index >= self.tokens.len() {
            (self.tokens.len(), ErrorStyle::After)
        } else if index == 0 && style == ErrorStyle::After {
            (0, ErrorStyle::Got)
        } else {
            (index, style)
        };

        match style {
            ErrorStyle::At => token_error(&format!("{message} at '{{}}'"), &self.tokens[index]),
            ErrorStyle::Got => token_error(&format!("{message}, got '{{}}'"), &self.tokens[index]),
            ErrorStyle::After => {
                token_error(&format!("{message} after '{{}}'"), &self.tokens[index - 1])
            }
        }
    }
}
