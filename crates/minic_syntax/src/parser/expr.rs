/// Shift-reduce expression engine.
///
/// Consumes the maximal prefix of tokens starting at the given index that
/// forms a valid expression, producing its tree with correct precedence and
/// associativity. Precedence climbing is expressed through the reduction
/// guard: a pending `expr op expr` on the stack is not reduced while the
/// next unconsumed token binds tighter, and assignment chains defer their
/// reduction so the whole right-hand side folds first.
///
/// One slot in the parsing stack: either a raw shifted token or a reduced
/// expression. Each slot carries the number of source tokens it covers, so
/// the final reduction knows how far the expression reached.
enum StackItem {
    Token(Token),
    Expr(Expr, usize),
}

/// Binding strength for binary-operator tokens; higher binds tighter.
/// Returns `None` for tokens that are not binary operators.
fn binary_precedence(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Equals => Some(1),
        TokenKind::Plus => Some(11),
        TokenKind::Star => Some(12),
        _ => None,
    }
}

/// Assignment operators are right-associative.
fn is_assignment(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Equals)
}

/// Reduce a number or identifier token on top of the stack to a leaf node.
/// Leaves never combine further on their own, so no lookahead is needed.
fn reduce_leaf(stack: &mut [StackItem]) -> bool {
    let Some(top) = stack.last_mut() else {
        return false;
    };
    let StackItem::Token(token) = top else {
        return false;
    };
    let leaf = match &token.kind {
        TokenKind::Number(value) => Expr::Number(*value),
        TokenKind::Ident(name) => Expr::Identifier(name.clone()),
        _ => return false,
    };
    *top = StackItem::Expr(leaf, 1);
    true
}

/// Reduce `expr op expr` on top of the stack into a binary node, unless the
/// next unconsumed token defers the reduction.
fn reduce_binary(stack: &mut Vec<StackItem>, next: Option<&TokenKind>) -> bool {
    let tail_start = stack.len().saturating_sub(3);
    let [StackItem::Expr(..), StackItem::Token(op_token), StackItem::Expr(..)] =
        &stack[tail_start..]
    else {
        return false;
    };
    let Some(op_prec) = binary_precedence(&op_token.kind) else {
        return false;
    };

    if let Some(next_kind) = next {
        if let Some(next_prec) = binary_precedence(next_kind) {
            // A tighter-binding operator must absorb the right operand first.
            if next_prec > op_prec {
                return false;
            }
            // Assignment chains fold right to left: `a = b = c` waits until
            // `b = c` has reduced.
            if is_assignment(&op_token.kind) && is_assignment(next_kind) {
                return false;
            }
        }
    }

    let op = match op_token.kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Equals => BinaryOp::Assign,
        _ => return false,
    };

    let (Some(StackItem::Expr(right, right_len)), Some(StackItem::Token(_)), Some(StackItem::Expr(left, left_len))) =
        (stack.pop(), stack.pop(), stack.pop())
    else {
        unreachable!("INVARIANT: stack top matched expr/op/expr above");
    };
    stack.push(StackItem::Expr(
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        left_len + 1 + right_len,
    ));
    true
}

impl<'a> Parser<'a> {
    /// Parse the longest expression starting at `index`.
    ///
    /// Each loop turn performs exactly one action: reduce a leaf, reduce a
    /// binary pattern, shift the next token, or stop. A trailing token that
    /// cannot extend the expression (a semicolon, say) is left for the
    /// caller. Failure means the stack never collapsed to a single node.
    fn expression(&mut self, index: usize) -> Option<(Expr, usize)> {
        let mut stack: Vec<StackItem> = Vec::new();
        let mut cursor = index;

        loop {
            if reduce_leaf(&mut stack) {
                continue;
            }
            if reduce_binary(&mut stack, self.tokens.get(cursor).map(|t| &t.kind)) {
                continue;
            }

            let Some(token) = self.tokens.get(cursor) else {
                break;
            };
            let can_shift = matches!(token.kind, TokenKind::Number(_) | TokenKind::Ident(_))
                || binary_precedence(&token.kind).is_some();
            if !can_shift {
                break;
            }
            stack.push(StackItem::Token(token.clone()));
            cursor += 1;
        }

        match stack.into_iter().next() {
            Some(StackItem::Expr(expr, length)) => Some((expr, index + length)),
            _ => self.record_error("expected expression", cursor, ErrorStyle::Got),
        }
    }
}
