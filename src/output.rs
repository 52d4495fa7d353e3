#![forbid(unsafe_code)]

//! Output formatting for command results
//!
//! Commands produce a [`Report`]; the human and JSONL formatters render it.

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::parser::{Fraction, TypedValue};
use crate::sizes::ArraySize;
use crate::status::{Error, StatusCode};
use crate::student::Student;

/// Significant digits used by [`format_g`]
const G_PRECISION: i32 = 6;

/// Successful result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Parsed pair and its quotient
    Quotient { fraction: Fraction, value: f64 },
    /// Mean of `count` values
    Mean { count: usize, value: f64 },
    /// Largest of `count` values
    Maximum { count: usize, value: f64 },
    /// Uniform samples and the interval they were drawn from
    Samples {
        low: f64,
        high: f64,
        values: Vec<f64>,
    },
    /// A tagged value read from input
    Value(TypedValue),
    /// A student record, as CSV or labelled lines
    Student { student: Student, csv: bool },
    /// Array-size report
    Sizes(Vec<ArraySize>),
    /// Status registry entries
    Statuses(Vec<StatusEntry>),
}

/// One status registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: i32,
    pub name: &'static str,
    /// `None` when the code is outside the defined range
    pub status: Option<StatusCode>,
}

impl StatusEntry {
    pub fn lookup(code: i32) -> Self {
        StatusEntry {
            code,
            name: crate::status::err_to_str(code),
            status: StatusCode::from_code(code),
        }
    }
}

/// A failed command, with the action that failed
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<'a> {
    /// Short description of what was attempted, such as "parse arguments"
    pub action: &'a str,
    pub error: &'a Error,
}

/// Formats `value` the way C's `%g` does
///
/// Six significant digits, trailing zeros removed, exponent notation when
/// the decimal exponent is below -4 or at least 6.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to the target precision
    let scientific = format!("{:.*e}", (G_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..G_PRECISION).contains(&exponent) {
        let decimals = (G_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(number: &str) -> String {
    if number.contains('.') {
        number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        number.to_string()
    }
}

/// Formats a sequence as `{a, b, c}` using [`format_g`]
pub fn format_sequence(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_g(*v)).collect();
    format!("{{{}}}", items.join(", "))
}
