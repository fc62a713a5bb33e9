//! Public API for the Reckon calculator.
//!
//! [`calculate`] evaluates an input string with default options. Use a
//! [`Calculator`] to pick the dialect, evaluation strategy or depth limits.
//!
//! # Example
//!
//! ```
//! use reckon_core::api::{CalcOptions, Calculator, Strategy, calculate};
//! use reckon_core::Dialect;
//!
//! assert_eq!(calculate("3+5/2").unwrap(), 5);
//!
//! let calc = Calculator::new(CalcOptions {
//!     dialect: Dialect::Basic,
//!     strategy: Strategy::SinglePass,
//!     ..CalcOptions::default()
//! });
//! assert_eq!(calc.calculate("(1+(4+5+2)-3)+(6+8)").unwrap(), 23);
//! assert!(calc.calculate("3*2").is_err());
//! ```

pub mod calculator;
pub mod error;
pub mod options;

pub use calculator::{Calculator, calculate};
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::{CalcOptions, Strategy};
