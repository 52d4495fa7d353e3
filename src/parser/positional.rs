#![forbid(unsafe_code)]

//! Positional convention: `<num> <den>`

use super::{ArgParser, Fraction, Role, parse_role_value};
use crate::status::{Error, Result};

/// Slot holding the numerator
const NUMERATOR_SLOT: usize = 0;
/// Slot holding the denominator
const DENOMINATOR_SLOT: usize = 1;
/// Exact number of tokens accepted
const EXPECTED_TOKENS: usize = 2;

/// Reads the numerator and denominator from fixed slots
///
/// Flags are never interpreted: `-n` in a slot is just an invalid number.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalParser;

impl ArgParser for PositionalParser {
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

        let numerator = parse_role_value(Role::Numerator, args[NUMERATOR_SLOT].as_ref())?;
        let denominator = parse_role_value(Role::Denominator, args[DENOMINATOR_SLOT].as_ref())?;

        Ok(Fraction {
            numerator,
            denominator,
        })
    }
}
