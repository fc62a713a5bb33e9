//! Binary and unary operator implementations.

use crate::{
    evaluator::EvalError,
    parser::{BinaryOp, Span, UnaryOp},
};

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division truncates toward zero; division by zero returns an error.
pub(crate) fn eval_binary_int(
    op: BinaryOp,
    left: i64,
    right: i64,
    span: Option<Span>,
) -> Result<i64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero { span })
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
    }
}

/// Evaluate a unary operation on an integer.
pub(crate) fn eval_unary_int(op: UnaryOp, value: i64) -> i64 {
    match op {
        UnaryOp::Pos => value,
        UnaryOp::Neg => value.wrapping_neg(),
    }
}
