//! Property-based tests for the minic frontend
//!
//! These tests use proptest to verify parser invariants across many randomly
//! generated programs, catching edge cases that hand-written tests might
//! miss. A successful `parse` implies every token was consumed, since
//! leftover tokens are a hard error.

use minic::ast::{BinaryOp, Expr, Stmt};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Strategy for generating valid minic identifiers
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("Not a keyword", |s| {
        !matches!(s.as_str(), "int" | "main" | "return")
    })
}

/// Strategy for generating expression leaves (identifiers or numbers)
fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ident_strategy(),
        (0i64..1_000_000).prop_map(|n| n.to_string()),
    ]
}

/// Strategy for generating flat binary-operator expressions
fn expr_strategy() -> impl Strategy<Value = String> {
    let tail = proptest::collection::vec((prop_oneof![Just("+"), Just("*")], leaf_strategy()), 0..6);
    (leaf_strategy(), tail).prop_map(|(first, rest)| {
        let mut rendered = first;
        for (op, leaf) in rest {
            rendered.push_str(&format!(" {op} {leaf}"));
        }
        rendered
    })
}

// =============================================================================
// Shape checkers
// =============================================================================

/// Assert that `expr` is the left-nested addition of `values`.
fn assert_left_chain(expr: &Expr, values: &[i64]) {
    match values {
        [] => panic!("empty chain"),
        [only] => assert_eq!(expr, &Expr::Number(*only)),
        [init @ .., last] => match expr {
            Expr::Binary {
                left,
                op: BinaryOp::Add,
                right,
            } => {
                assert_eq!(right.as_ref(), &Expr::Number(*last));
                assert_left_chain(left, init);
            }
            other => panic!("expected addition chain, got {other:?}"),
        },
    }
}

/// Assert that `expr` is the right-nested assignment of `names` ending in `0`.
fn assert_right_chain(expr: &Expr, names: &[String]) {
    match names {
        [] => assert_eq!(expr, &Expr::Number(0)),
        [first, rest @ ..] => match expr {
            Expr::Binary {
                left,
                op: BinaryOp::Assign,
                right,
            } => {
                assert_eq!(left.as_ref(), &Expr::Identifier(first.clone()));
                assert_right_chain(right, rest);
            }
            other => panic!("expected assignment chain, got {other:?}"),
        },
    }
}

// =============================================================================
// Parser properties
// =============================================================================

proptest! {
    /// Property: every generated valid program parses, with the expected
    /// number of body statements.
    #[test]
    fn generated_programs_parse(name in ident_strategy(), expr in expr_strategy()) {
        let source = format!("int main() {{ int {name}; {name} = {expr}; return {name}; }}");
        let program = minic::compile_source(&source).unwrap();
        prop_assert_eq!(program.body.len(), 3);
    }

    /// Property: repeated `+` at equal precedence folds left-to-right.
    #[test]
    fn addition_chains_fold_left(values in proptest::collection::vec(0i64..1000, 1..8)) {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let source = format!("int main() {{ return {}; }}", rendered.join(" + "));
        let program = minic::compile_source(&source).unwrap();
        match &program.body[..] {
            [Stmt::Return(expr)] => assert_left_chain(expr, &values),
            other => panic!("expected a single return, got {other:?}"),
        }
    }

    /// Property: chained assignment folds right-to-left.
    #[test]
    fn assignment_chains_fold_right(names in proptest::collection::vec(ident_strategy(), 1..6)) {
        let mut source = String::from("int main() { ");
        for name in &names {
            source.push_str(&format!("{name} = "));
        }
        source.push_str("0; }");
        let program = minic::compile_source(&source).unwrap();
        match &program.body[..] {
            [Stmt::Expr(expr)] => assert_right_chain(expr, &names),
            other => panic!("expected a single expression statement, got {other:?}"),
        }
    }

    /// Property: anything after the closing brace of `main` is rejected.
    #[test]
    fn trailing_tokens_always_fail(name in ident_strategy()) {
        let source = format!("int main() {{ return 0; }} {name}");
        prop_assert!(minic::compile_source(&source).is_err());
    }
}
