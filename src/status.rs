#![forbid(unsafe_code)]

//! Status codes and the error type shared by every operation
//!
//! Each operation yields exactly one [`StatusCode`]. Success is carried by
//! `Ok(..)` and corresponds to [`StatusCode::Ok`]; every failure is an
//! [`Error`] variant that maps back to its code through [`Error::status`].

use thiserror::Error;

/// Name returned by [`err_to_str`] for codes outside the defined range
pub const UNKNOWN_STATUS_NAME: &str = "unknown";

/// Outcome of a parse or compute operation
///
/// Discriminants are stable and used as the integer form of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    NullPtr = 1,
    InsufficientArguments = 2,
    TooManyArguments = 3,
    InvalidNumerator = 4,
    InvalidDenominator = 5,
    UnknownArgument = 6,
    LzeroArray = 7,
    InvalidArg = 8,
    Unknown = 9,
}

impl StatusCode {
    /// Every defined code, in integer order
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Ok,
        StatusCode::NullPtr,
        StatusCode::InsufficientArguments,
        StatusCode::TooManyArguments,
        StatusCode::InvalidNumerator,
        StatusCode::InvalidDenominator,
        StatusCode::UnknownArgument,
        StatusCode::LzeroArray,
        StatusCode::InvalidArg,
        StatusCode::Unknown,
    ];

    /// Integer value of the code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a code by its integer value
    pub fn from_code(code: i32) -> Option<StatusCode> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Canonical diagnostic name of the code
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Ok => "ST_OK",
            StatusCode::NullPtr => "ST_ERR_NULL_PTR",
            StatusCode::InsufficientArguments => "ST_ERR_INSUFFICIENT_ARGUMENTS",
            StatusCode::TooManyArguments => "ST_ERR_TOO_MANY_ARGUMENTS",
            StatusCode::InvalidNumerator => "ST_ERR_INVALID_NUMERATOR",
            StatusCode::InvalidDenominator => "ST_ERR_INVALID_DENOMINATOR",
            StatusCode::UnknownArgument => "ST_ERR_UNKNOWN_ARGUMENT",
            StatusCode::LzeroArray => "ST_ERR_LZERO_ARRAY",
            StatusCode::InvalidArg => "ST_ERR_INVALID_ARG",
            StatusCode::Unknown => "ST_ERR_UNKNOWN",
        }
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an integer status code to its canonical name
///
/// Total: any value outside the defined range yields [`UNKNOWN_STATUS_NAME`].
pub fn err_to_str(code: i32) -> &'static str {
    StatusCode::from_code(code)
        .map(StatusCode::name)
        .unwrap_or(UNKNOWN_STATUS_NAME)
}

/// Failure of an operation, one variant per failing [`StatusCode`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required input was absent
    #[error("required input is missing")]
    NullPtr,

    /// Fewer tokens than required, or a required flag was never supplied
    #[error("insufficient arguments: {0}")]
    InsufficientArguments(String),

    /// More tokens than the convention accepts
    #[error("too many arguments: expected {expected}, got {actual}")]
    TooManyArguments { expected: usize, actual: usize },

    /// The numerator token is not a fully consumed number
    #[error("invalid numerator '{0}'")]
    InvalidNumerator(String),

    /// The denominator token is not a fully consumed number
    #[error("invalid denominator '{0}'")]
    InvalidDenominator(String),

    /// A flag position held a token that matches no recognized flag
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    /// A sequence that must be non-empty was empty
    #[error("sequence has length zero")]
    LzeroArray,

    /// An argument was rejected
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Any failure without a more specific code
    #[error("{0}")]
    Unknown(String),
}

impl Error {
    /// Status code this failure reports
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NullPtr => StatusCode::NullPtr,
            Error::InsufficientArguments(_) => StatusCode::InsufficientArguments,
            Error::TooManyArguments { .. } => StatusCode::TooManyArguments,
            Error::InvalidNumerator(_) => StatusCode::InvalidNumerator,
            Error::InvalidDenominator(_) => StatusCode::InvalidDenominator,
            Error::UnknownArgument(_) => StatusCode::UnknownArgument,
            Error::LzeroArray => StatusCode::LzeroArray,
            Error::InvalidArg(_) => StatusCode::InvalidArg,
            Error::Unknown(_) => StatusCode::Unknown,
        }
    }
}

/// Result of an operation: payload on `ST_OK`, an [`Error`] otherwise
pub type Result<T> = std::result::Result<T, Error>;

/// Status code of any result
pub fn status_of<T>(result: &Result<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::Ok,
        Err(e) => e.status(),
    }
}
