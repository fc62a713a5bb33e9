//! Public error types for the Reckon API.
//!
//! Every failure of a calculation is one of three stages failing: the lexer,
//! the parser or the evaluator. [`Error`] keeps the stage-specific error so
//! callers can tell them apart, and [`Error::to_diagnostic`] flattens any of
//! them into a [`Diagnostic`] for display.

use core::fmt;

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::lexer::LexError;
use crate::parser::{ParseError, ParseErrorKind, Span};

/// Public error type for all Reckon operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unrecognized character in the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Unexpected token or premature end of input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Arithmetic fault or resource limit hit while evaluating.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the input cannot be calculated.
    Error,
    /// Warning - suspicious input that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "opened here").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}

impl Error {
    /// Source span the error points at.
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => err.span(),
            Error::Parse(err) => err.span(),
            Error::Eval(EvalError::DivisionByZero { span }) => {
                span.clone().unwrap_or(Span::new(0, 0))
            }
            Error::Eval(EvalError::StackOverflow { .. }) => Span::new(0, 0),
        }
    }

    /// Convert to a Diagnostic for display
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut related = Vec::new();
        let (message, code, help) = match self {
            Error::Lex(err) => (
                format!("Unrecognized character {:?}", err.character),
                "L001",
                vec!["Only digits, '+', '-', '*', '/', '(' and ')' are allowed".to_string()],
            ),
            Error::Parse(err) => match &err.kind {
                ParseErrorKind::ExpectedExpression => (
                    format!("Expected expression, found {}", describe_found(err)),
                    "P001",
                    vec![],
                ),
                ParseErrorKind::UnclosedDelimiter { open } => {
                    related.push(RelatedInfo {
                        span: open.clone(),
                        message: "unclosed '(' opened here".to_string(),
                    });
                    (
                        format!("Unclosed delimiter '(', found {}", describe_found(err)),
                        "P002",
                        vec!["Add the missing closing delimiter".to_string()],
                    )
                }
                ParseErrorKind::TrailingInput => (
                    format!("Expected end of input, found {}", describe_found(err)),
                    "P003",
                    vec![],
                ),
                ParseErrorKind::InvalidNumber { text } => (
                    format!("Integer literal '{}' is out of range", text),
                    "P004",
                    vec![format!("Integers must lie between {} and {}", i64::MIN, i64::MAX)],
                ),
                ParseErrorKind::MaxDepthExceeded { max_depth } => (
                    format!(
                        "Expression nesting depth exceeds maximum of {} levels",
                        max_depth
                    ),
                    "P005",
                    vec!["Reduce nesting or simplify the expression".to_string()],
                ),
            },
            Error::Eval(EvalError::DivisionByZero { .. }) => {
                ("Division by zero".to_string(), "E001", vec![])
            }
            Error::Eval(err @ EvalError::StackOverflow { .. }) => (
                err.to_string(),
                "E002",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span(),
            related,
            help,
            code: Some(code.to_string()),
        }
    }
}

fn describe_found(err: &ParseError) -> String {
    if err.is_eof() {
        "end of input".to_string()
    } else {
        format!("'{}'", err.found)
    }
}
