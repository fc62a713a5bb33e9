mod builder;
pub mod error;
mod parsed_expr;
pub mod parser;
mod syntax;

pub use builder::{ExprBuilder, Folder, TreeBuilder};
pub use error::{Found, ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, ParsedExpr};
pub use parser::{Parser, ParserOptions, fold, parse, parse_with_max_depth, parse_with_options};
pub use syntax::AnnotatedSource;
pub use syntax::{BinaryOp, Dialect, Span, UnaryOp};


#[cfg(test)]
mod precedence_test;
