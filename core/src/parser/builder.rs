use bumpalo::Bump;

use crate::evaluator::{
    EvalError,
    operators::{eval_binary_int, eval_unary_int},
};
use crate::parser::{AnnotatedSource, BinaryOp, Expr, Span, UnaryOp};

/// The "Driver" trait.
///
/// The parser recognizes the grammar and hands each reduced rule to a
/// builder, which decides what a reduced rule becomes: a tree node, a folded
/// integer, or anything else with the same shape.
pub trait ExprBuilder {
    type Output;

    fn number(&mut self, value: i64, span: Span) -> Result<Self::Output, EvalError>;

    fn unary(
        &mut self,
        op: UnaryOp,
        operand: Self::Output,
        span: Span,
    ) -> Result<Self::Output, EvalError>;

    fn binary(
        &mut self,
        op: BinaryOp,
        left: Self::Output,
        right: Self::Output,
        span: Span,
    ) -> Result<Self::Output, EvalError>;
}

/// Builds an [`Expr`] tree in an arena and records each node's span.
pub struct TreeBuilder<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(arena: &'a Bump, ann: &'a AnnotatedSource<'a, Expr<'a>>) -> Self {
        Self { arena, ann }
    }

    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }
}

impl<'a> ExprBuilder for TreeBuilder<'a> {
    type Output = &'a Expr<'a>;

    fn number(&mut self, value: i64, span: Span) -> Result<Self::Output, EvalError> {
        Ok(self.alloc(Expr::Number(value), span))
    }

    fn unary(
        &mut self,
        op: UnaryOp,
        operand: Self::Output,
        span: Span,
    ) -> Result<Self::Output, EvalError> {
        Ok(self.alloc(Expr::Unary { op, operand }, span))
    }

    fn binary(
        &mut self,
        op: BinaryOp,
        left: Self::Output,
        right: Self::Output,
        span: Span,
    ) -> Result<Self::Output, EvalError> {
        Ok(self.alloc(Expr::Binary { op, left, right }, span))
    }
}

/// Single-pass driver: every rule is evaluated as soon as it is reduced, so
/// no tree is ever materialized.
#[derive(Debug, Default, Clone, Copy)]
pub struct Folder;

impl ExprBuilder for Folder {
    type Output = i64;

    fn number(&mut self, value: i64, _span: Span) -> Result<i64, EvalError> {
        Ok(value)
    }

    fn unary(&mut self, op: UnaryOp, operand: i64, _span: Span) -> Result<i64, EvalError> {
        Ok(eval_unary_int(op, operand))
    }

    fn binary(
        &mut self,
        op: BinaryOp,
        left: i64,
        right: i64,
        span: Span,
    ) -> Result<i64, EvalError> {
        eval_binary_int(op, left, right, Some(span))
    }
}
