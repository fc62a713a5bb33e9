//! Recursive-descent parser over the token list.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expression     := addition
//! addition       := multiplication (('+' | '-') multiplication)*
//! multiplication := unary (('*' | '/') unary)*        // Standard dialect only
//! unary          := ('+' | '-') unary | primary
//! primary        := NUMBER | '(' expression ')'
//! ```
//!
//! One token of lookahead is enough, so the cursor only ever moves forward.

use bumpalo::Bump;

use crate::api::Error;
use crate::lexer::{Token, TokenKind, tokenize};
use crate::parser::{
    AnnotatedSource, BinaryOp, Dialect, ExprBuilder, Folder, ParsedExpr, Span, TreeBuilder,
    UnaryOp,
    error::{Found, ParseError, ParseErrorKind},
};

/// Options controlling what the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub dialect: Dialect,
    /// Maximum nesting of parentheses and unary operators.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            max_depth: 500,
        }
    }
}

pub struct Parser<'t, B> {
    tokens: &'t [Token],
    pos: usize,
    source_len: usize,
    options: ParserOptions,
    depth: usize,
    builder: B,
}

impl<'t, B: ExprBuilder> Parser<'t, B> {
    /// `source_len` is the byte length of the text the tokens came from; it
    /// is the position reported for errors at end of input.
    pub fn new(
        tokens: &'t [Token],
        source_len: usize,
        options: ParserOptions,
        builder: B,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len,
            options,
            depth: 0,
            builder,
        }
    }

    /// Parse one complete expression; every token must be consumed.
    pub fn parse(mut self) -> Result<B::Output, Error> {
        let (output, _) = self.expression()?;
        if self.peek().is_some() {
            return Err(self.error(ParseErrorKind::TrailingInput));
        }
        Ok(output)
    }

    fn expression(&mut self) -> Result<(B::Output, Span), Error> {
        self.addition()
    }

    fn addition(&mut self) -> Result<(B::Output, Span), Error> {
        let (mut left, mut left_span) = self.multiplication()?;

        while let Some(op) = self.additive_op() {
            self.advance();
            let (right, right_span) = self.multiplication()?;
            let span = Span::combine(&left_span, &right_span);
            left = self.builder.binary(op, left, right, span.clone())?;
            left_span = span;
        }

        Ok((left, left_span))
    }

    fn multiplication(&mut self) -> Result<(B::Output, Span), Error> {
        let (mut left, mut left_span) = self.unary()?;

        while let Some(op) = self.multiplicative_op() {
            self.advance();
            let (right, right_span) = self.unary()?;
            let span = Span::combine(&left_span, &right_span);
            left = self.builder.binary(op, left, right, span.clone())?;
            left_span = span;
        }

        Ok((left, left_span))
    }

    fn unary(&mut self) -> Result<(B::Output, Span), Error> {
        let op = match self.peek_kind() {
            Some(TokenKind::Plus) => UnaryOp::Pos,
            Some(TokenKind::Minus) => UnaryOp::Neg,
            _ => return self.primary(),
        };
        let op_span = self
            .advance()
            .map_or_else(|| self.eof_span(), |t| t.span.clone());

        self.enter()?;
        let (operand, operand_span) = self.unary()?;
        self.leave();

        let span = Span::combine(&op_span, &operand_span);
        let output = self.builder.unary(op, operand, span.clone())?;
        Ok((output, span))
    }

    fn primary(&mut self) -> Result<(B::Output, Span), Error> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Number => {
                let value = token.text.parse::<i64>().map_err(|_| {
                    self.error(ParseErrorKind::InvalidNumber {
                        text: token.text.clone(),
                    })
                })?;
                self.advance();
                let output = self.builder.number(value, token.span.clone())?;
                Ok((output, token.span.clone()))
            }
            Some(token) if token.kind == TokenKind::LParen => {
                let open = token.span.clone();
                self.advance();

                self.enter()?;
                let (inner, _) = self.expression()?;
                self.leave();

                match self.peek() {
                    Some(close) if close.kind == TokenKind::RParen => {
                        self.advance();
                        Ok((inner, Span::combine(&open, &close.span)))
                    }
                    _ => Err(self.error(ParseErrorKind::UnclosedDelimiter { open })),
                }
            }
            _ => Err(self.error(ParseErrorKind::ExpectedExpression)),
        }
    }

    fn additive_op(&self) -> Option<BinaryOp> {
        match self.peek_kind()? {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn multiplicative_op(&self) -> Option<BinaryOp> {
        if !self.options.dialect.has_multiplication() {
            return None;
        }
        match self.peek_kind()? {
            TokenKind::Times => Some(BinaryOp::Mul),
            TokenKind::Divide => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ParseErrorKind::MaxDepthExceeded {
                max_depth: self.options.max_depth,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eof_span(&self) -> Span {
        Span::new(self.source_len, self.source_len)
    }

    /// Error pointing at the current token, or at EOF when none is left.
    fn error(&self, kind: ParseErrorKind) -> Error {
        let err = match self.peek() {
            Some(token) => {
                ParseError::new(kind, Found::Token(token.text.clone()), token.span.0.start)
            }
            None => ParseError::new(kind, Found::Eof, self.source_len),
        };
        err.into()
    }
}

/// Parse `source` into an expression tree allocated in `arena`.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, Error> {
    parse_with_options(arena, source, ParserOptions::default())
}

/// Parse with a custom maximum nesting depth.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, Error> {
    let options = ParserOptions {
        max_depth,
        ..ParserOptions::default()
    };
    parse_with_options(arena, source, options)
}

pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: ParserOptions,
) -> Result<ParsedExpr<'a>, Error> {
    let tokens = tokenize(source)?;
    let ann: &'a AnnotatedSource<'a, _> = arena.alloc(AnnotatedSource::new(arena, source));
    let builder = TreeBuilder::new(arena, ann);
    let expr = Parser::new(&tokens, source.len(), options, builder).parse()?;
    tracing::trace!(len = source.len(), "parsed expression");
    Ok(ParsedExpr { expr, ann })
}

/// Single-pass calculation: parse and evaluate in one sweep without
/// building a tree.
pub fn fold(source: &str, options: ParserOptions) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens, source.len(), options, Folder).parse()
}
