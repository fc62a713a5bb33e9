//! Tokenizer for calculator input.
//!
//! The token set is fixed and dialect-independent: `*` and `/` always lex,
//! and it is up to the parser to reject them when the active dialect has no
//! multiplicative level.

use core::fmt;

use logos::Logos;
use thiserror::Error;

use crate::parser::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[regex("[0-9]+")]
    Number,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Times,

    #[token("/")]
    Divide,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Number => "number",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Times => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
        };
        f.write_str(s)
    }
}

/// A lexed token together with the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

/// A character that is not part of the calculator's alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized character {character:?} at position {position}")]
pub struct LexError {
    pub character: char,
    /// Byte offset of the character in the source.
    pub position: usize,
}

impl LexError {
    pub fn span(&self) -> Span {
        Span::new(self.position, self.position + self.character.len_utf8())
    }
}

/// Split `source` into tokens, failing on the first unrecognized character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice().to_string(),
                span: Span(range),
            }),
            Err(()) => {
                let character = source[range.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError {
                    character,
                    position: range.start,
                });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
