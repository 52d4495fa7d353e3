#![forbid(unsafe_code)]

//! Strict numeric literal parsing
//!
//! A token is a number only if the whole token is consumed. Leading ASCII
//! whitespace is skipped; anything left over after the literal is rejected.

use crate::status::{Error, Result};
use serde::Serialize;

/// Parses a floating-point literal that must consume the whole token
///
/// Accepts an optional sign, decimal and exponent forms, `inf`, `infinity`
/// and `nan`. Hexadecimal literals are not accepted. Empty input and
/// trailing characters fail with [`Error::InvalidArg`].
pub fn parse_f64(token: &str) -> Result<f64> {
    let literal = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if literal.is_empty() {
        return Err(Error::InvalidArg(format!("'{}' is not a number", token)));
    }

    literal
        .parse::<f64>()
        .map_err(|_| Error::InvalidArg(format!("'{}' is not a number", token)))
}

/// A value read with a one-letter type tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    /// `d<float>`
    Double(f64),
    /// `l<integer>`, base 10
    Long(i64),
    /// `u<integer>`, base 10
    UnsignedLong(u64),
}

impl TypedValue {
    /// Parses a tagged value such as `d3.5`, `l-42` or `u7`
    ///
    /// A single trailing newline (as left by a line read) is ignored.
    pub fn parse(input: &str) -> Result<TypedValue> {
        let input = input.strip_suffix('\n').unwrap_or(input);
        let input = input.strip_suffix('\r').unwrap_or(input);

        let mut chars = input.chars();
        let tag = chars
            .next()
            .ok_or_else(|| Error::InvalidArg("expected [dlu]value, got nothing".to_string()))?;
        let payload = chars.as_str();

        match tag {
            'd' => parse_f64(payload).map(TypedValue::Double),
            'l' => parse_integer::<i64>(payload).map(TypedValue::Long),
            'u' => parse_integer::<u64>(payload).map(TypedValue::UnsignedLong),
            other => Err(Error::InvalidArg(format!(
                "expected [dlu]value, got tag '{}'",
                other
            ))),
        }
    }

    /// Name of the value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Double(_) => "double",
            TypedValue::Long(_) => "long",
            TypedValue::UnsignedLong(_) => "unsigned long",
        }
    }
}

fn parse_integer<T: std::str::FromStr>(token: &str) -> Result<T> {
    let literal = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    literal
        .parse::<T>()
        .map_err(|_| Error::InvalidArg(format!("'{}' is not an integer", token)))
}
