#![allow(dead_code)]

use once_cell::sync::Lazy;
use reckon::{CalcOptions, Calculator, Error, Strategy};

/// Defines a `#[test]` that checks an input against any of:
///
/// - `formatted`: canonical parenthesized rendering of the parsed tree
/// - `value`: result of `calculate`, for both tree and single-pass strategies
/// - `error`: pattern the `calculate` error must match
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: { $input:expr },
        $(formatted: { $formatted:expr },)?
        $(value: { $value:expr },)?
        $(error: { $error:pat },)?
    ) => {
        #[test]
        fn $name() {
            let input: &str = $input;
            $(
                let arena = ::bumpalo::Bump::new();
                let parsed = ::reckon::parser::parse(&arena, input)
                    .unwrap_or_else(|e| panic!("parsing {:?} failed: {}", input, e));
                ::pretty_assertions::assert_eq!(parsed.expr.to_string(), $formatted);
            )?
            $(
                let expected: i64 = $value;
                ::pretty_assertions::assert_eq!(::reckon::calculate(input), Ok(expected));
                ::pretty_assertions::assert_eq!(crate::cases::single_pass(input), Ok(expected));
            )?
            $(
                let result = ::reckon::calculate(input);
                assert!(
                    matches!(result, Err($error)),
                    "unexpected result for {:?}: {:?}",
                    input,
                    result
                );
            )?
        }
    };
}

pub fn single_pass(input: &str) -> Result<i64, Error> {
    Calculator::new(CalcOptions {
        strategy: Strategy::SinglePass,
        ..CalcOptions::default()
    })
    .calculate(input)
}

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub value: i64,
}

/// Inputs of the original demo programs plus the documented properties.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "simple_addition",
            expr: "1 + 1",
            value: 2,
        },
        TestCase {
            name: "leading_unary_minus",
            expr: "   -1 + 3",
            value: 2,
        },
        TestCase {
            name: "mixed_spacing",
            expr: " 2-1 + 2 ",
            value: 3,
        },
        TestCase {
            name: "nested_parentheses",
            expr: "(1+(4+5+2)-3)+(6+8)",
            value: 23,
        },
        TestCase {
            name: "multiplication_binds_tighter",
            expr: "3+2*2",
            value: 7,
        },
        TestCase {
            name: "truncating_division",
            expr: " 3/2 ",
            value: 1,
        },
        TestCase {
            name: "division_binds_tighter",
            expr: " 3+5 / 2 ",
            value: 5,
        },
        TestCase {
            name: "left_associative_subtraction",
            expr: "1-2-3",
            value: -4,
        },
        TestCase {
            name: "double_negation",
            expr: "--3",
            value: 3,
        },
        TestCase {
            name: "mixed_unary_chain",
            expr: "-+-3",
            value: 3,
        },
    ]
});
