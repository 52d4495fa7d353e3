#![forbid(unsafe_code)]

//! Two-field student record

use crate::status::{Error, Result};
use std::fmt;

/// A student identified by first and last name
///
/// Ordered by first name, then last name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Student {
    first_name: String,
    last_name: String,
}

impl Student {
    /// Creates a record from copies of both names
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArg`] if either name is blank.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        if first_name.trim().is_empty() {
            return Err(Error::InvalidArg("first name is empty".to_string()));
        }
        if last_name.trim().is_empty() {
            return Err(Error::InvalidArg("last name is empty".to_string()));
        }

        Ok(Student {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Two labelled lines, one per field
    pub fn pretty(&self) -> String {
        format!("Name: {}\nSurname: {}\n", self.first_name, self.last_name)
    }

    /// One CSV row with both fields quoted
    pub fn to_csv(&self) -> String {
        format!(
            "\"{}\",\"{}\"",
            escape_csv(&self.first_name),
            escape_csv(&self.last_name)
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

fn escape_csv(field: &str) -> String {
    field.replace('"', "\"\"")
}
