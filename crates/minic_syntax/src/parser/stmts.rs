/// Statement and declaration recognizers.
///
/// One method per non-terminal: `main_function`, `statement`,
/// `return_statement`, `expression_statement`, `declaration`, plus the
/// shared semicolon helper that completes each of them.
impl<'a> Parser<'a> {
    // ========================================================================
    // Main function
    // ========================================================================

    /// Ex: `int main() { return 4; }`
    fn main_function(&mut self, index: usize) -> Option<(MainFunction, usize)> {
        const PROLOGUE: [TokenKind; 5] = [
            TokenKind::IntKw,
            TokenKind::Main,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
        ];

        let mut index = index;
        match self.match_tokens(index, &PROLOGUE) {
            Some(matched) => index += matched,
            None => {
                let divergent = index + self.divergence_offset(index, &PROLOGUE);
                return self.record_error("expected main function starting", divergent, ErrorStyle::At);
            }
        }

        // Body: statements and declarations until neither matches. Running
        // out of alternatives here is not an error, it ends the body.
        let mut body = Vec::new();
        loop {
            let (node, new_index) = match self.statement(index) {
                Some(result) => result,
                None => match self.declaration(index) {
                    Some(result) => result,
                    None => break,
                },
            };
            body.push(node);
            index = new_index;
        }

        if self.match_token(index, &TokenKind::CloseBrace) {
            Some((MainFunction { body }, index + 1))
        } else {
            self.record_error("expected closing brace", index, ErrorStyle::At)
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Ordered alternation: `return`, then expression statement. Records no
    /// error of its own; the constituent recognizers already recorded theirs.
    fn statement(&mut self, index: usize) -> Option<(Stmt, usize)> {
        if let Some(result) = self.return_statement(index) {
            return Some(result);
        }
        self.expression_statement(index)
    }

    /// Require a `;` at `index`, completing `node`. A missing semicolon is
    /// something to insert, so the error references the token before it.
    fn finish_statement(&mut self, node: Stmt, index: usize) -> Option<(Stmt, usize)> {
        if self.match_token(index, &TokenKind::Semicolon) {
            Some((node, index + 1))
        } else {
            self.record_error("expected semicolon", index, ErrorStyle::After)
        }
    }

    /// Ex: `return 4;`
    fn return_statement(&mut self, index: usize) -> Option<(Stmt, usize)> {
        let mut index = index;
        if self.match_token(index, &TokenKind::Return) {
            index += 1;
        } else {
            return self.record_error("expected return keyword", index, ErrorStyle::Got);
        }

        let (expr, index) = self.expression(index)?;
        self.finish_statement(Stmt::Return(expr), index)
    }

    /// Ex: `x = 3 + 4;`
    fn expression_statement(&mut self, index: usize) -> Option<(Stmt, usize)> {
        let (expr, index) = self.expression(index)?;
        self.finish_statement(Stmt::Expr(expr), index)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Ex: `int x;`
    fn declaration(&mut self, index: usize) -> Option<(Stmt, usize)> {
        let mut index = index;
        if self.match_token(index, &TokenKind::IntKw) {
            index += 1;
        } else {
            return self.record_error("expected type name", index, ErrorStyle::Got);
        }

        let name = match self.tokens.get(index) {
            Some(Token {
                kind: TokenKind::Ident(name),
                ..
            }) => name.clone(),
            _ => return self.record_error("expected identifier", index, ErrorStyle::After),
        };
        index += 1;

        self.finish_statement(Stmt::Declaration(name), index)
    }
}
