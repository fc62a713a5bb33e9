//! Runtime evaluation errors.
//!
//! Parsing already guarantees a well-formed tree, so the only things that can
//! go wrong while evaluating are arithmetic faults and resource limits.

use thiserror::Error;

use crate::parser::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Integer division with a zero divisor. `span` covers the division.
    #[error("division by zero{}", fmt_span(.span))]
    DivisionByZero { span: Option<Span> },

    /// Evaluation recursion depth exceeded.
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

fn fmt_span(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {}..{}", span.0.start, span.0.end),
        None => String::new(),
    }
}
