use crate::parser::Expr;
use bumpalo::Bump;

use super::parser::parse;

// Helper function to parse an expression and return the AST.
//
// We test precedence by comparing whether two expressions parenthesized in
// different ways yield the same AST.
fn ast<'a>(arena: &'a Bump, source: &'a str) -> &'a Expr<'a> {
    let parsed = parse(arena, source)
        .unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", source, e));
    parsed.expr
}

fn canonical(source: &str) -> String {
    let arena = Bump::new();
    ast(&arena, source).to_string()
}

#[test]
fn test_addition_vs_subtraction() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "1 + 2 - 3"), ast(&arena, "(1 + 2) - 3"));
    assert_eq!(ast(&arena, "1 - 2 + 3"), ast(&arena, "(1 - 2) + 3"));
    assert_eq!(
        ast(&arena, "1 + 2 - 3 + 4 - 5 + 6"),
        ast(&arena, "((((1 + 2) - 3) + 4) - 5) + 6")
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "1-2-3"), ast(&arena, "(1-2)-3"));
    assert_ne!(ast(&arena, "1-2-3"), ast(&arena, "1-(2-3)"));
}

#[test]
fn test_multiplication_vs_division() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "8 * 4 / 2"), ast(&arena, "(8 * 4) / 2"));
    assert_eq!(ast(&arena, "8 / 4 * 2"), ast(&arena, "(8 / 4) * 2"));
    assert_eq!(
        ast(&arena, "1 * 2 / 3 * 4 / 5 * 6"),
        ast(&arena, "((((1 * 2) / 3) * 4) / 5) * 6")
    );
}

#[test]
fn test_addition_vs_multiplication() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "3 + 2 * 2"), ast(&arena, "3 + (2 * 2)"));
    assert_eq!(ast(&arena, "3 * 2 + 2"), ast(&arena, "(3 * 2) + 2"));
    assert_eq!(ast(&arena, "3 + 5 / 2"), ast(&arena, "3 + (5 / 2)"));
}

#[test]
fn test_unary_vs_binary() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "--3"), ast(&arena, "-(-3)"));
    assert_eq!(ast(&arena, "-1 + 2"), ast(&arena, "(-1) + 2"));
    assert_eq!(ast(&arena, "1 + -2"), ast(&arena, "1 + (-2)"));
    assert_eq!(ast(&arena, "-2 * 3"), ast(&arena, "(-2) * 3"));
    assert_eq!(ast(&arena, "2 * -3"), ast(&arena, "2 * (-3)"));
}

#[test]
fn test_unary_chains_nest_right() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "-+-3"), ast(&arena, "-(+(-3))"));
}

#[test]
fn test_redundant_parentheses_vanish() {
    let arena = Bump::new();
    assert_eq!(ast(&arena, "((((7))))"), ast(&arena, "7"));
    assert_eq!(ast(&arena, "(1 + (2))"), ast(&arena, "1 + 2"));
}

#[test]
fn test_canonical_rendering() {
    assert_eq!(canonical("1 + 1"), "(1+1)");
    assert_eq!(canonical("1-2-3"), "((1-2)-3)");
    assert_eq!(canonical("3+2*2"), "(3+(2*2))");
    assert_eq!(canonical("--3"), "--3");
    assert_eq!(canonical("-+-3"), "-+-3");
    assert_eq!(canonical("-(1+2)"), "-(1+2)");
    assert_eq!(
        canonical("(1+(4+5+2)-3)+(6+8)"),
        "(((1+((4+5)+2))-3)+(6+8))"
    );
}
