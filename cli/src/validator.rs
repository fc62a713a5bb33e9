use reckon::lexer::{TokenKind, tokenize};
use reedline::{ValidationResult, Validator};

/// Net number of open parentheses in `buffer`.
///
/// Returns `None` when the buffer does not lex, so the caller can submit it
/// and let the calculator report the bad character.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let tokens = tokenize(buffer).ok()?;
    let mut depth: isize = 0;

    for token in &tokens {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth -= 1,
            _ => {}
        }
    }

    if depth < 0 { Some(0) } else { Some(depth as usize) }
}

/// Keeps the REPL line open while parentheses are unbalanced.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
