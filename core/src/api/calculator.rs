//! The calculation entry point.

use bumpalo::Bump;

use super::{CalcOptions, Error, Strategy};
use crate::evaluator::Evaluator;
use crate::parser::{self, ParsedExpr};

/// A configured calculator.
///
/// Holds only its options: every call builds its own lexer, parser and
/// evaluator, so a `Calculator` can be shared freely between threads.
///
/// # Example
///
/// ```
/// use reckon_core::api::{CalcOptions, Calculator};
///
/// let calc = Calculator::new(CalcOptions::default());
/// assert_eq!(calc.calculate("   -1 +  3").unwrap(), 2);
/// assert_eq!(calc.calculate("1-2-3").unwrap(), -4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalcOptions,
}

impl Calculator {
    pub fn new(options: CalcOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    /// Calculate the integer value of `input`.
    pub fn calculate(&self, input: &str) -> Result<i64, Error> {
        tracing::debug!(
            dialect = ?self.options.dialect,
            strategy = ?self.options.strategy,
            len = input.len(),
            "calculating"
        );

        let result = match self.options.strategy {
            Strategy::Tree => {
                let arena = Bump::new();
                let parsed = self.parse(&arena, input)?;
                let mut evaluator = Evaluator::new(self.options.evaluator_options(), &parsed);
                evaluator.eval().map_err(Error::from)
            }
            Strategy::SinglePass => parser::fold(input, self.options.parser_options()),
        };

        if let Err(err) = &result {
            tracing::debug!(error = %err, "calculation failed");
        }
        result
    }

    /// Parse `input` into an expression tree without evaluating it.
    ///
    /// Useful for inspecting the grouping the parser chose; render it with
    /// `Display` for the canonical parenthesized form.
    pub fn parse<'a>(&self, arena: &'a Bump, input: &'a str) -> Result<ParsedExpr<'a>, Error> {
        parser::parse_with_options(arena, input, self.options.parser_options())
    }
}

/// Calculate `input` with default options.
///
/// # Example
///
/// ```
/// use reckon_core::calculate;
///
/// assert_eq!(calculate("(1+(4+5+2)-3)+(6+8)").unwrap(), 23);
/// assert_eq!(calculate("3+2*2").unwrap(), 7);
/// assert!(calculate("(1+2").is_err());
/// ```
pub fn calculate(input: &str) -> Result<i64, Error> {
    Calculator::default().calculate(input)
}
