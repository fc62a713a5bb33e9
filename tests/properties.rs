//! Whole-pipeline properties checked over the sample table and over
//! generated expressions.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use reckon::{CalcOptions, Calculator, Strategy, calculate};

mod cases;

use cases::TEST_CASES;

#[test]
fn test_sample_table() {
    for case in TEST_CASES.iter() {
        assert_eq!(calculate(case.expr), Ok(case.value), "{}", case.name);
        assert_eq!(cases::single_pass(case.expr), Ok(case.value), "{}", case.name);
    }
}

#[test]
fn test_idempotent() {
    for case in TEST_CASES.iter() {
        let first = calculate(case.expr);
        let second = calculate(case.expr);
        assert_eq!(first, second, "{}", case.name);
    }
}

#[test]
fn test_whitespace_insertion_is_neutral() {
    // Padding inside a digit run would split the literal.
    for case in TEST_CASES.iter() {
        let padded: String = case
            .expr
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    c.to_string()
                } else {
                    format!(" \t{}\n ", c)
                }
            })
            .collect();
        assert_eq!(calculate(&padded), Ok(case.value), "{}: {:?}", case.name, padded);
    }
}

#[test]
fn test_shared_calculator_across_threads() {
    let calc = Arc::new(Calculator::new(CalcOptions {
        strategy: Strategy::SinglePass,
        ..CalcOptions::default()
    }));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || {
                let input = format!("{} * (2 + 3)", i);
                calc.calculate(&input)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as i64 * 5));
    }
}

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Returns a fully parenthesized expression and its value.
fn generate(rng: &mut Lcg, depth: u32) -> (String, i64) {
    if depth == 0 || rng.below(4) == 0 {
        let n = rng.below(1000) as i64;
        return (n.to_string(), n);
    }

    match rng.below(6) {
        0 => {
            let (text, value) = generate(rng, depth - 1);
            (format!("-{}", text), value.wrapping_neg())
        }
        1 => {
            let (text, value) = generate(rng, depth - 1);
            (format!("+{}", text), value)
        }
        op => {
            let (left, lv) = generate(rng, depth - 1);
            let (right, rv) = generate(rng, depth - 1);
            let (symbol, value) = match op {
                2 => ('+', lv.wrapping_add(rv)),
                3 => ('-', lv.wrapping_sub(rv)),
                4 => ('*', lv.wrapping_mul(rv)),
                _ if rv != 0 => ('/', lv.wrapping_div(rv)),
                _ => ('+', lv.wrapping_add(rv)),
            };
            (format!("({} {} {})", left, symbol, right), value)
        }
    }
}

#[test]
fn test_generated_expressions_match_reference() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let (text, value) = generate(&mut rng, 6);
        assert_eq!(calculate(&text), Ok(value), "{}", text);
        assert_eq!(cases::single_pass(&text), Ok(value), "{}", text);
    }
}

#[test]
fn test_flat_chains_are_left_associative() {
    let mut rng = Lcg(42);
    for _ in 0..100 {
        let mut text = String::new();
        let mut value = 0i64;
        for i in 0..20 {
            let n = rng.below(100) as i64;
            if i == 0 {
                value = n;
                text.push_str(&n.to_string());
            } else if rng.below(2) == 0 {
                value += n;
                text.push_str(&format!("+{}", n));
            } else {
                value -= n;
                text.push_str(&format!("-{}", n));
            }
        }
        assert_eq!(calculate(&text), Ok(value), "{}", text);
    }
}

#[test]
fn test_long_chains_on_default_thread() {
    for terms in [1024, 1025, 100_000] {
        let text = vec!["1"; terms].join("+");
        assert_eq!(calculate(&text), Ok(terms as i64), "{} terms", terms);
        assert_eq!(cases::single_pass(&text), Ok(terms as i64), "{} terms", terms);
    }
}
