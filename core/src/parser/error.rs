use core::fmt;

use thiserror::Error;

use crate::parser::Span;

/// Parser error with the offending token and where it sits in the source.
///
/// Parsing never recovers: the first error aborts the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position} but got '{found}'")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub found: Found,
    /// Byte offset of the offending token, or the source length at EOF.
    pub position: usize,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A number or `(` was required.
    #[error("expected expression")]
    ExpectedExpression,
    /// A `(` was never closed; `open` is the span of the `(`.
    #[error("unmatched left bracket")]
    UnclosedDelimiter { open: Span },
    /// A complete expression was followed by more tokens.
    #[error("unexpected trailing input")]
    TrailingInput,
    /// Digit run that does not fit the integer type.
    #[error("integer literal {text} is out of range")]
    InvalidNumber { text: String },
    /// Parentheses or unary operators nested too deeply.
    #[error("expression nesting exceeds maximum depth of {max_depth}")]
    MaxDepthExceeded { max_depth: usize },
}

/// What the parser was looking at when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(String),
    Eof,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => f.write_str(text),
            Found::Eof => f.write_str("EOF"),
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, found: Found, position: usize) -> Self {
        Self {
            kind,
            found,
            position,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.found == Found::Eof
    }

    /// Source span of the offending token (empty at EOF).
    pub fn span(&self) -> Span {
        match &self.found {
            Found::Token(text) => Span::new(self.position, self.position + text.len()),
            Found::Eof => Span::new(self.position, self.position),
        }
    }
}
