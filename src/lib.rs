//! Reckon - a small, embeddable integer calculator
//!
//! # Overview
//!
//! Reckon evaluates arithmetic over 64-bit integers: `+`, `-`, `*`, `/`,
//! unary signs and parentheses. Parsing is strict, errors carry the offending
//! token and its position, and nothing is kept between calls.
//!
//! # Quick Start
//!
//! ```
//! use reckon::{CalcOptions, Calculator, Dialect, Strategy, calculate};
//!
//! assert_eq!(calculate("(1+(4+5+2)-3)+(6+8)").unwrap(), 23);
//! assert_eq!(calculate("3+5/2").unwrap(), 5);
//!
//! // Two-operator grammar, evaluated while parsing.
//! let calc = Calculator::new(CalcOptions {
//!     dialect: Dialect::Basic,
//!     strategy: Strategy::SinglePass,
//!     ..CalcOptions::default()
//! });
//! assert_eq!(calc.calculate("--3").unwrap(), 3);
//! ```
//!
//! # Errors
//!
//! Failures are reported as [`Error`], which tells lexer, parser and
//! evaluator failures apart. The [`error_renderer`] module prints them with
//! the source line and a pointer at the offending token.

// Re-export public API from reckon_core
pub use reckon_core::api::{
    CalcOptions, Calculator, Diagnostic, Error, RelatedInfo, Severity, Strategy, calculate,
};
pub use reckon_core::{evaluator, lexer, parser};
pub use reckon_core::parser::Dialect;

// Re-export errors
pub use reckon_core::evaluator::EvalError;
pub use reckon_core::lexer::LexError;
pub use reckon_core::parser::ParseError;

pub mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
