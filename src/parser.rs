#![forbid(unsafe_code)]

//! Numerator/denominator argument parsing
//!
//! Raw command-line tokens (program name excluded) are turned into a
//! validated [`Fraction`] under one of three interchangeable conventions:
//!
//! - positional: `<num> <den>`
//! - long flags: `--numerador N --denominador D`, any order
//! - short flags: `-n N -d D`, long forms also accepted, any order

pub mod flagged;
pub mod number;
pub mod positional;

pub use flagged::{FlaggedParser, Role};
pub use number::{TypedValue, parse_f64};
pub use positional::PositionalParser;

use crate::status::{Error, Result};
use serde::Deserialize;

/// A successfully parsed numerator/denominator pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction {
    pub numerator: f64,
    pub denominator: f64,
}

impl Fraction {
    pub fn new(numerator: f64, denominator: f64) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    /// IEEE division of the pair; a zero denominator gives `inf` or NaN
    pub fn quotient(&self) -> f64 {
        self.numerator / self.denominator
    }
}

/// Turns raw tokens into a [`Fraction`]
pub trait ArgParser {
    /// Parses `args`, which excludes the program name
    ///
    /// On failure nothing is produced; the error names the failing code.
    fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Fraction>;
}

/// Token convention accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `<num> <den>`
    Positional,
    /// `--numerador N --denominador D`
    Long,
    /// `-n N -d D`, long forms also accepted
    #[default]
    Short,
}

impl Convention {
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Positional => "positional",
            Convention::Long => "long",
            Convention::Short => "short",
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `args` under `convention`
///
/// `None` stands for an absent argument list and fails with
/// [`Error::NullPtr`].
pub fn parse_arguments<S: AsRef<str>>(
    convention: Convention,
    args: Option<&[S]>,
) -> Result<Fraction> {
    let args = args.ok_or(Error::NullPtr)?;
    log::debug!(
        "parsing {} token(s) with the {} convention",
        args.len(),
        convention
    );

    match convention {
        Convention::Positional => PositionalParser.parse(args),
        Convention::Long => FlaggedParser::long().parse(args),
        Convention::Short => FlaggedParser::short().parse(args),
    }
}

/// Parses `token` as the value for `role`, reporting the role's own code
pub(crate) fn parse_role_value(role: Role, token: &str) -> Result<f64> {
    parse_f64(token).map_err(|_| {
        log::debug!("rejected {} token '{}'", role.as_str(), token);
        match role {
            Role::Numerator => Error::InvalidNumerator(token.to_string()),
            Role::Denominator => Error::InvalidDenominator(token.to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusCode;

    #[test]
    fn test_absent_args_is_null_ptr() {
        for convention in [Convention::Positional, Convention::Long, Convention::Short] {
            let err = parse_arguments::<&str>(convention, None).unwrap_err();
            assert_eq!(err.status(), StatusCode::NullPtr);
        }
    }

    #[test]
    fn test_dispatch_by_convention() {
        let positional = ["10", "4"];
        let long = ["--numerador", "10", "--denominador", "4"];
        let short = ["-d", "4", "-n", "10"];

        let expected = Fraction::new(10.0, 4.0);
        assert_eq!(
            parse_arguments(Convention::Positional, Some(&positional[..])).unwrap(),
            expected
        );
        assert_eq!(
            parse_arguments(Convention::Long, Some(&long[..])).unwrap(),
            expected
        );
        assert_eq!(
            parse_arguments(Convention::Short, Some(&short[..])).unwrap(),
            expected
        );
    }

    #[test]
    fn test_long_convention_rejects_short_flags() {
        let args = ["-n", "10", "-d", "4"];
        let err = parse_arguments(Convention::Long, Some(&args[..])).unwrap_err();
        assert_eq!(err, Error::UnknownArgument("-n".to_string()));
    }

    #[test]
    fn test_quotient_division_by_zero() {
        assert_eq!(Fraction::new(5.0, 0.0).quotient(), f64::INFINITY);
        assert_eq!(Fraction::new(-5.0, 0.0).quotient(), f64::NEG_INFINITY);
        assert!(Fraction::new(0.0, 0.0).quotient().is_nan());
        assert_eq!(Fraction::new(10.0, 4.0).quotient(), 2.5);
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(Convention::default(), Convention::Short);
        assert_eq!(Convention::Positional.to_string(), "positional");
        assert_eq!(Convention::Long.as_str(), "long");
    }
}
