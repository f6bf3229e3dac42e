//! Abstract Syntax Tree definitions for the minic C subset
//!
//! The supported surface is a single `main` function whose body is a
//! sequence of statements and declarations. Nodes are plain owned trees:
//! ownership of children transfers fully to the parent, with no sharing.

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Identifier spelling
pub type Ident = String;

/// The root node: `int main() { ... }` with its body in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct MainFunction {
    pub body: Vec<Stmt>,
}

/// Statements and declarations that may appear in the function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `return expr;`
    Return(Expr),
    /// A bare expression statement: `expr;`
    Expr(Expr),
    /// `int name;`
    Declaration(Ident),
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i64),
    Identifier(Ident),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

/// Binary operators, in increasing order of binding strength: assignment,
/// addition, multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Mul,
    Assign,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Assign => write!(f, "="),
        }
    }
}
