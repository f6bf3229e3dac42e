#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the shapes produced for specific syntactic forms and
/// on the error-selection policy when every grammar alternative fails.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<MainFunction, CompileError> {
        let tokens = lexer::lex(source).expect("lexing should succeed");
        parse(&tokens)
    }

    fn num(value: i64) -> Expr {
        Expr::Number(value)
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    // ========================================================================
    // Successful parses
    // ========================================================================

    #[test]
    fn test_parse_return_statement() {
        let program = parse_str("int main() { return 4; }").unwrap();
        assert_eq!(program.body, vec![Stmt::Return(num(4))]);
    }

    #[test]
    fn test_parse_full_body() {
        let program = parse_str("int main() { int x; x = 1 + 2; return x; }").unwrap();
        assert_eq!(
            program.body,
            vec![
                Stmt::Declaration("x".to_string()),
                Stmt::Expr(binary(ident("x"), BinaryOp::Assign, binary(num(1), BinaryOp::Add, num(2)))),
                Stmt::Return(ident("x")),
            ]
        );
    }

    #[test]
    fn test_parse_empty_body() {
        let program = parse_str("int main() { }").unwrap();
        assert_eq!(program.body, Vec::new());
    }

    #[test]
    fn test_precedence_mul_inside_add() {
        let program = parse_str("int main() { x = 1 + 2 * 3; }").unwrap();
        let expected = binary(
            ident("x"),
            BinaryOp::Assign,
            binary(num(1), BinaryOp::Add, binary(num(2), BinaryOp::Mul, num(3))),
        );
        assert_eq!(program.body, vec![Stmt::Expr(expected)]);
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let program = parse_str("int main() { a = b = c; }").unwrap();
        let expected = binary(
            ident("a"),
            BinaryOp::Assign,
            binary(ident("b"), BinaryOp::Assign, ident("c")),
        );
        assert_eq!(program.body, vec![Stmt::Expr(expected)]);
    }

    #[test]
    fn test_equal_precedence_folds_left_to_right() {
        // Repeated same-precedence operators must reduce before the next one
        // is shifted, giving left associativity.
        let program = parse_str("int main() { x = 1 + 2 + 3; }").unwrap();
        let expected = binary(
            ident("x"),
            BinaryOp::Assign,
            binary(binary(num(1), BinaryOp::Add, num(2)), BinaryOp::Add, num(3)),
        );
        assert_eq!(program.body, vec![Stmt::Expr(expected)]);
    }

    #[test]
    fn test_mul_chain_folds_left_to_right() {
        let program = parse_str("int main() { return 2 * 3 * 4; }").unwrap();
        let expected = binary(binary(num(2), BinaryOp::Mul, num(3)), BinaryOp::Mul, num(4));
        assert_eq!(program.body, vec![Stmt::Return(expected)]);
    }

    // ========================================================================
    // Failures and error selection
    // ========================================================================

    #[test]
    fn test_missing_semicolon_reports_after_previous_token() {
        let err = parse_str("int main() { return 4 }").unwrap_err();
        assert_eq!(err.message, "expected semicolon after '4'");
    }

    #[test]
    fn test_truncated_program_reports_after_last_token() {
        let err = parse_str("int main() { return 4").unwrap_err();
        assert_eq!(err.message, "expected semicolon after '4'");
    }

    #[test]
    fn test_empty_source_reports_beginning_of_source() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.message, "expected main function starting at beginning of source");
    }

    #[test]
    fn test_prologue_divergence_points_at_wrong_token() {
        let err = parse_str("int main( { }").unwrap_err();
        assert_eq!(err.message, "expected main function starting at '{'");
    }

    #[test]
    fn test_short_prologue_clamps_to_after_style() {
        let err = parse_str("int main").unwrap_err();
        assert_eq!(err.message, "expected main function starting after 'main'");
    }

    #[test]
    fn test_deepest_error_wins() {
        // The declaration attempt gets past `int` before failing, one token
        // deeper than the statement attempts; its error must surface.
        let err = parse_str("int main() { int 5; }").unwrap_err();
        assert_eq!(err.message, "expected identifier after 'int'");
    }

    #[test]
    fn test_latest_error_wins_ties() {
        // All four candidate errors land on the stray semicolon; the closing
        // brace check records last and wins.
        let err = parse_str("int main() { ; }").unwrap_err();
        assert_eq!(err.message, "expected closing brace at ';'");
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let err = parse_str("int main() { return 0; } extra").unwrap_err();
        assert_eq!(err.message, "unexpected token at 'extra'");
    }

    #[test]
    fn test_operator_without_operands_is_not_an_expression() {
        let err = parse_str("int main() { return + ; }").unwrap_err();
        assert_eq!(err.message, "expected expression, got ';'");
    }

    #[test]
    fn test_expression_stops_before_dangling_operator() {
        // The expression engine consumes only `1` and leaves `+` for the
        // caller, which then misses its semicolon.
        let err = parse_str("int main() { return 1 + ; }").unwrap_err();
        assert_eq!(err.message, "expected semicolon after '1'");
    }

    #[test]
    fn test_missing_return_value() {
        // The return recognizer gets one token deep before its expression
        // fails, so that failure outranks the shallower alternatives.
        let err = parse_str("int main() { return ; }").unwrap_err();
        assert_eq!(err.message, "expected expression, got ';'");
    }

    #[test]
    fn test_independent_parses_do_not_share_errors() {
        let tokens = lexer::lex("int main() { return 4 }").expect("lexing should succeed");
        let first = parse(&tokens).unwrap_err();
        let second = parse(&tokens).unwrap_err();
        assert_eq!(first, second);
    }
}
