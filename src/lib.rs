#![forbid(unsafe_code)]

//! Drills: small command-line exercises built on one status-code convention
//!
//! The core is a numerator/denominator argument parser that accepts
//! positional, long-flag and short-flag conventions and reports failures
//! through a flat set of status codes. Numeric, string and record helpers
//! share the same [`status::Result`] type.

pub mod cli;
pub mod config;
pub mod numeric;
pub mod output;
pub mod parser;
pub mod sizes;
pub mod status;
pub mod strings;
pub mod student;

pub use status::{Error, Result, StatusCode, err_to_str};
