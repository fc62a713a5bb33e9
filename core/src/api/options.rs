//! Configuration options for the calculator.

use crate::evaluator::EvaluatorOptions;
use crate::parser::{Dialect, ParserOptions};

/// How an input is turned into a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Build an expression tree, then evaluate it.
    #[default]
    Tree,
    /// Evaluate while parsing; no tree is built.
    SinglePass,
}

/// Configuration options for a [`Calculator`](super::Calculator).
///
/// # Example
///
/// ```
/// use reckon_core::api::{CalcOptions, Strategy};
/// use reckon_core::Dialect;
///
/// let options = CalcOptions {
///     dialect: Dialect::Basic,
///     strategy: Strategy::Tree,
///     max_parse_depth: 100,
///     max_eval_depth: 1_000,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcOptions {
    /// Operator set accepted by the parser.
    ///
    /// Default: [`Dialect::Standard`]
    pub dialect: Dialect,

    /// Default: [`Strategy::Tree`]
    pub strategy: Strategy,

    /// Maximum nesting of parentheses and unary operators.
    ///
    /// Default: 500
    pub max_parse_depth: usize,

    /// Maximum operand nesting during evaluation (tree strategy only).
    /// Binary chains do not count against it.
    ///
    /// Default: 1024
    pub max_eval_depth: usize,
}

impl Default for CalcOptions {
    fn default() -> Self {
        let parser = ParserOptions::default();
        let evaluator = EvaluatorOptions::default();
        Self {
            dialect: parser.dialect,
            strategy: Strategy::default(),
            max_parse_depth: parser.max_depth,
            max_eval_depth: evaluator.max_depth,
        }
    }
}

impl CalcOptions {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            dialect: self.dialect,
            max_depth: self.max_parse_depth,
        }
    }

    pub fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            max_depth: self.max_eval_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stage_defaults() {
        let options = CalcOptions::default();
        assert_eq!(options.parser_options(), ParserOptions::default());
        assert_eq!(options.evaluator_options(), EvaluatorOptions::default());
        assert_eq!(options.strategy, Strategy::Tree);
        assert_eq!(options.dialect, Dialect::Standard);
    }
}
