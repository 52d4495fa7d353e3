#![forbid(unsafe_code)]

//! Flag conventions: `--numerador N --denominador D` and `-n N -d D`
//!
//! Tokens are read as (flag, value) steps. Each flag is looked up by a
//! linear scan over an ordered table; the first matching entry wins.

use super::{ArgParser, Fraction, parse_role_value};
use crate::status::{Error, Result};

/// What a recognized flag designates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Numerator,
    Denominator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Numerator => "numerator",
            Role::Denominator => "denominator",
        }
    }
}

/// Flags accepted by the long convention
pub const LONG_FLAGS: &[(&str, Role)] = &[
    ("--numerador", Role::Numerator),
    ("--denominador", Role::Denominator),
    ("--numerator", Role::Numerator),
    ("--denominator", Role::Denominator),
];

/// Flags accepted by the short convention
pub const SHORT_FLAGS: &[(&str, Role)] = &[
    ("-n", Role::Numerator),
    ("--numerador", Role::Numerator),
    ("-d", Role::Denominator),
    ("--denominador", Role::Denominator),
    ("--numerator", Role::Numerator),
    ("--denominator", Role::Denominator),
];

/// Exact number of tokens accepted: two flags, two values
const EXPECTED_TOKENS: usize = 4;

/// Parser driven by a fixed flag table
#[derive(Debug, Clone, Copy)]
pub struct FlaggedParser {
    flags: &'static [(&'static str, Role)],
}

impl FlaggedParser {
    /// Parser over an arbitrary flag table
    pub fn new(flags: &'static [(&'static str, Role)]) -> Self {
        FlaggedParser { flags }
    }

    /// Long flags only
    pub fn long() -> Self {
        Self::new(LONG_FLAGS)
    }

    /// Short flags, long forms also accepted
    pub fn short() -> Self {
        Self::new(SHORT_FLAGS)
    }

    /// Role of `token`, if it is a recognized flag
    pub fn lookup(&self, token: &str) -> Option<Role> {
        self.flags
            .iter()
            .find(|(flag, _)| *flag == token)
            .map(|(_, role)| *role)
    }
}

impl ArgParser for FlaggedParser {
    fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Fraction> {
        if args.len() < EXPECTED_TOKENS {
            return Err(Error::InsufficientArguments(format!(
                "expected {} tokens, got {}",
                EXPECTED_TOKENS,
                args.len()
            )));
        }

        if args.len() > EXPECTED_TOKENS {
            return Err(Error::TooManyArguments {
                expected: EXPECTED_TOKENS,
                actual: args.len(),
            });
        }

        let mut numerator = None;
        let mut denominator = None;

        for step in args.chunks_exact(2) {
            let flag = step[0].as_ref();
            let value = step[1].as_ref();

            match self.lookup(flag) {
                Some(role @ Role::Numerator) => {
                    numerator = Some(parse_role_value(role, value)?);
                }
                Some(role @ Role::Denominator) => {
                    denominator = Some(parse_role_value(role, value)?);
                }
                None => {
                    log::debug!("'{}' matches no recognized flag", flag);
                    return Err(Error::UnknownArgument(flag.to_string()));
                }
            }
        }

        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            (None, _) => Err(Error::InsufficientArguments(
                "numerator was never supplied".to_string(),
            )),
            (_, None) => Err(Error::InsufficientArguments(
                "denominator was never supplied".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusCode;

    fn long(args: &[&str]) -> Result<Fraction> {
        FlaggedParser::long().parse(args)
    }

    fn short(args: &[&str]) -> Result<Fraction> {
        FlaggedParser::short().parse(args)
    }

    #[test]
    fn test_long_flags_any_order() {
        let a = long(&["--numerador", "10", "--denominador", "4"]).unwrap();
        let b = long(&["--denominador", "4", "--numerador", "10"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Fraction::new(10.0, 4.0));
    }

    #[test]
    fn test_short_and_long_flags_mix() {
        let a = short(&["-n", "10", "--denominador", "4"]).unwrap();
        let b = short(&["--numerador", "10", "-d", "4"]).unwrap();
        let c = short(&["-d", "4", "-n", "10"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_english_aliases() {
        let fraction = long(&["--numerator", "1", "--denominator", "8"]).unwrap();
        assert_eq!(fraction.quotient(), 0.125);
    }

    #[test]
    fn test_token_count_checked_before_flags() {
        assert_eq!(
            long(&["--bogus", "1"]).unwrap_err().status(),
            StatusCode::InsufficientArguments
        );
        assert_eq!(
            long(&["--bogus", "1", "2", "3", "4"]).unwrap_err().status(),
            StatusCode::TooManyArguments
        );
    }

    #[test]
    fn test_unknown_flag() {
        let err = long(&["--numerador", "10", "--divisor", "4"]).unwrap_err();
        assert_eq!(err, Error::UnknownArgument("--divisor".to_string()));
    }

    #[test]
    fn test_value_in_flag_position_is_unknown() {
        let err = short(&["-n", "1", "2", "-d"]).unwrap_err();
        assert_eq!(err, Error::UnknownArgument("2".to_string()));
    }

    #[test]
    fn test_invalid_values() {
        let err = short(&["-n", "ten", "-d", "4"]).unwrap_err();
        assert_eq!(err, Error::InvalidNumerator("ten".to_string()));

        let err = short(&["-n", "10", "-d", "4x"]).unwrap_err();
        assert_eq!(err, Error::InvalidDenominator("4x".to_string()));
    }

    #[test]
    fn test_repeated_flag_leaves_role_missing() {
        let err = long(&["--numerador", "1", "--numerador", "2"]).unwrap_err();
        assert_eq!(err.status(), StatusCode::InsufficientArguments);

        let err = short(&["-d", "1", "--denominador", "2"]).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientArguments("numerator was never supplied".to_string())
        );
    }

    #[test]
    fn test_negative_value_after_flag() {
        let fraction = short(&["-n", "-6", "-d", "3"]).unwrap();
        assert_eq!(fraction.quotient(), -2.0);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let parser = FlaggedParser::short();
        assert_eq!(parser.lookup("-n"), Some(Role::Numerator));
        assert_eq!(parser.lookup("--denominador"), Some(Role::Denominator));
        assert_eq!(parser.lookup("-x"), None);
        assert_eq!(FlaggedParser::long().lookup("-n"), None);
    }
}
