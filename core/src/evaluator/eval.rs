//! Core evaluation logic.

use crate::{
    evaluator::{
        EvalError, EvaluatorOptions,
        operators::{eval_binary_int, eval_unary_int},
    },
    parser::{AnnotatedSource, Expr, ParsedExpr},
};

/// Evaluator for parsed expressions.
pub struct Evaluator<'a> {
    options: EvaluatorOptions,
    expr: &'a Expr<'a>,
    /// Span table used to locate runtime errors.
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions, parsed: &ParsedExpr<'a>) -> Self {
        Self {
            options,
            expr: parsed.expr,
            ann: parsed.ann,
            depth: 0,
        }
    }

    /// Evaluate the whole expression.
    pub fn eval(&mut self) -> Result<i64, EvalError> {
        self.eval_expr(self.expr)
    }

    /// Evaluate a nested operand, counting one level of depth.
    ///
    /// Only unary operands and right-hand operands nest; the left spine of a
    /// binary chain is walked in a loop, so `1+1+...+1` never grows the
    /// native stack however long it is.
    fn eval_nested(&mut self, expr: &'a Expr<'a>) -> Result<i64, EvalError> {
        if let Expr::Number(value) = *expr {
            return Ok(value);
        }

        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Result<i64, EvalError> {
        match *expr {
            Expr::Number(value) => Ok(value),
            Expr::Unary { op, operand } => {
                let value = self.eval_nested(operand)?;
                Ok(eval_unary_int(op, value))
            }
            Expr::Binary { .. } => {
                let mut spine = Vec::new();
                let mut node = expr;
                while let Expr::Binary { left, .. } = *node {
                    spine.push(node);
                    node = left;
                }

                // `node` is the leftmost operand; fold the spine bottom-up.
                let mut acc = self.eval_nested(node)?;
                for &binary in spine.iter().rev() {
                    if let Expr::Binary { op, right, .. } = *binary {
                        let right = self.eval_nested(right)?;
                        acc = eval_binary_int(op, acc, right, self.ann.span_of(binary))?;
                    }
                }
                Ok(acc)
            }
        }
    }
}
