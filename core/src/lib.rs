//! Core pipeline of the Reckon integer calculator.
//!
//! Input text flows through three stages, each instantiated fresh per call:
//!
//! 1. [`lexer`] turns the source into a flat list of [`lexer::Token`]s.
//! 2. [`parser`] runs a recursive-descent parser over the tokens. Depending
//!    on the [`parser::ExprBuilder`] driving it, the parser either builds an
//!    arena-allocated [`parser::Expr`] tree or folds straight to an integer.
//! 3. [`evaluator`] walks a parsed tree and produces the final `i64`.
//!
//! The [`api`] module ties the stages together behind [`calculate`] and
//! [`Calculator`].

pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod parser;

pub use api::{
    CalcOptions, Calculator, Diagnostic, Error, RelatedInfo, Severity, Strategy, calculate,
};
pub use parser::Dialect;
