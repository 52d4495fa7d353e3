//! Integration tests for the argument parser through the public API
//!
//! This test suite verifies the parser's observable contract:
//! - Valid tokens yield exactly the parsed values
//! - Each failure reports its own status code and nothing else
//! - Flag order never changes the result
//! - The status registry is total

use drills::parser::{ArgParser, Convention, FlaggedParser, Fraction, parse_arguments};
use drills::status::{StatusCode, err_to_str, status_of};
use drills::numeric;
use std::collections::HashSet;

fn parse(convention: Convention, args: &[&str]) -> drills::Result<Fraction> {
    parse_arguments(convention, Some(args))
}

#[test]
fn test_positional_values_round_exactly() {
    for (num, den) in [("10", "4"), ("-1.5", "3e2"), ("0", "0.001")] {
        let fraction = parse(Convention::Positional, &[num, den]).unwrap();
        assert_eq!(fraction.numerator, num.parse::<f64>().unwrap());
        assert_eq!(fraction.denominator, den.parse::<f64>().unwrap());
    }
}

#[test]
fn test_non_numeric_slot_reports_its_role() {
    let result = parse(Convention::Positional, &["10", "abc"]);
    assert_eq!(status_of(&result), StatusCode::InvalidDenominator);

    let result = parse(Convention::Positional, &["abc", "10"]);
    assert_eq!(status_of(&result), StatusCode::InvalidNumerator);
}

#[test]
fn test_flag_order_is_irrelevant() {
    let conventions = [
        (
            Convention::Long,
            ["--numerador", "10", "--denominador", "4"],
            ["--denominador", "4", "--numerador", "10"],
        ),
        (
            Convention::Short,
            ["-n", "10", "-d", "4"],
            ["-d", "4", "-n", "10"],
        ),
    ];

    for (convention, forward, backward) in conventions {
        assert_eq!(
            parse(convention, &forward).unwrap(),
            parse(convention, &backward).unwrap()
        );
    }
}

#[test]
fn test_count_bounds_per_convention() {
    let cases: [(Convention, &[&str], StatusCode); 6] = [
        (Convention::Positional, &[], StatusCode::InsufficientArguments),
        (Convention::Positional, &["1"], StatusCode::InsufficientArguments),
        (Convention::Positional, &["1", "2", "3"], StatusCode::TooManyArguments),
        (Convention::Long, &["--numerador", "1"], StatusCode::InsufficientArguments),
        (
            Convention::Long,
            &["--numerador", "1", "--denominador", "2", "x"],
            StatusCode::TooManyArguments,
        ),
        (
            Convention::Short,
            &["-n", "1", "-n", "2"],
            StatusCode::InsufficientArguments,
        ),
    ];

    for (convention, args, expected) in cases {
        let result = parse(convention, args);
        assert_eq!(status_of(&result), expected, "{:?} {:?}", convention, args);
    }
}

#[test]
fn test_absent_argument_list() {
    let result = parse_arguments::<String>(Convention::Short, None);
    assert_eq!(status_of(&result), StatusCode::NullPtr);
}

#[test]
fn test_owned_string_tokens() {
    let args: Vec<String> = vec!["-n".into(), "3".into(), "-d".into(), "4".into()];
    let fraction = FlaggedParser::short().parse(&args).unwrap();
    assert_eq!(fraction.quotient(), 0.75);
}

#[test]
fn test_zero_denominator_parses() {
    let fraction = parse(Convention::Positional, &["5", "0"]).unwrap();
    assert_eq!(fraction, Fraction::new(5.0, 0.0));
    assert_eq!(fraction.quotient(), f64::INFINITY);
}

#[test]
fn test_mean_failures_are_distinct() {
    let null = numeric::mean(None);
    let empty = numeric::mean(Some(&[][..]));
    assert_eq!(status_of(&null), StatusCode::NullPtr);
    assert_eq!(status_of(&empty), StatusCode::LzeroArray);
    assert_ne!(status_of(&null), status_of(&empty));
}

#[test]
fn test_status_lookup_is_total() {
    let names: HashSet<&str> = StatusCode::ALL.iter().map(|s| err_to_str(s.code())).collect();
    assert_eq!(names.len(), StatusCode::ALL.len());
    assert!(names.iter().all(|name| !name.is_empty()));

    for code in [-100, -1, 10, 11, 1000] {
        assert_eq!(err_to_str(code), "unknown");
    }
}
