//! Tree-walking evaluator for parsed calculator expressions.
//!
//! ## Design Principles
//!
//! - **Never panic**: arithmetic wraps on overflow and division by zero is an
//!   error value, so adversarial input cannot crash the host
//! - **Stack-safe**: binary chains are folded in a loop and depth tracking
//!   stops runaway recursion through nested operands
//!
//! ## Example
//!
//! ```
//! use reckon_core::{evaluator, parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "(1+(4+5+2)-3)+(6+8)").unwrap();
//! assert_eq!(evaluator::eval(&parsed).unwrap(), 23);
//! ```

mod error;
mod eval;
pub(crate) mod operators;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::parser::ParsedExpr;

/// Configuration options for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting of unary and right-hand operands.
    ///
    /// Binary chains are evaluated iteratively along their left spine and
    /// do not count. Each parser nesting level (see
    /// [`ParserOptions::max_depth`](crate::parser::ParserOptions)) costs at
    /// most two levels here, so the default admits everything the default
    /// parser accepts.
    ///
    /// Default: 1024
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1024 }
    }
}

/// Evaluate a parsed expression with default limits.
pub fn eval(parsed: &ParsedExpr<'_>) -> Result<i64, EvalError> {
    eval_with_options(parsed, EvaluatorOptions::default())
}

/// Evaluate a parsed expression with custom limits.
pub fn eval_with_options(
    parsed: &ParsedExpr<'_>,
    options: EvaluatorOptions,
) -> Result<i64, EvalError> {
    Evaluator::new(options, parsed).eval()
}
