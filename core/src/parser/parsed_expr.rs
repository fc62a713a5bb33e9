use core::fmt;

use crate::parser::{BinaryOp, UnaryOp, syntax::AnnotatedSource};

#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

/// Arena-allocated expression tree.
///
/// Every node exclusively owns its children; the arena frees the whole tree
/// at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'a> {
    Number(i64),
    Unary {
        op: UnaryOp,
        operand: &'a Expr<'a>,
    },
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
}

impl<'a> Expr<'a> {
    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }

    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Unary { operand, .. } => 1 + operand.size(),
            Expr::Binary { left, right, .. } => 1 + left.size() + right.size(),
        }
    }
}

/// Canonical fully parenthesized rendering, e.g. `((1+2)-3)` or `-(4*5)`.
///
/// Meant for debugging and tests; feeding it back to the parser is not
/// guaranteed to reproduce the same tree.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Unary { op, operand } => write!(f, "{}{}", op, operand),
            Expr::Binary { op, left, right } => write!(f, "({}{}{})", left, op, right),
        }
    }
}
