#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use super::{Failure, Report, StatusEntry, format_g, format_sequence};
use crate::parser::TypedValue;
use crate::sizes::ArraySize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Formats command reports for terminal display with optional colors.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format a report as plain text
    pub fn format(&self, report: &Report) -> String {
        match report {
            Report::Quotient { value, .. }
            | Report::Mean { value, .. }
            | Report::Maximum { value, .. } => format!("{}\n", format_g(*value)),
            Report::Samples { values, .. } => format!("{}\n", format_sequence(values)),
            Report::Value(value) => format!("{}\n", describe_value(value)),
            Report::Student { student, csv } => {
                if *csv {
                    format!("{}\n", student.to_csv())
                } else {
                    student.pretty()
                }
            }
            Report::Sizes(rows) => format_sizes(rows),
            Report::Statuses(entries) => entries.iter().map(format_status_line).collect(),
        }
    }

    /// Format a failure as the single diagnostic line written to stderr
    pub fn format_failure(&self, failure: &Failure<'_>) -> String {
        format!(
            "Failed to {} ({}): {}\n",
            failure.action,
            failure.error.status().name(),
            failure.error
        )
    }

    /// Write a report to stdout, highlighting results
    pub fn write_to_stdout(&self, report: &Report) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        match report {
            Report::Quotient { value, .. }
            | Report::Mean { value, .. }
            | Report::Maximum { value, .. } => {
                stdout.set_color(ColorSpec::new().set_bold(true))?;
                write!(stdout, "{}", format_g(*value))?;
                stdout.reset()?;
                writeln!(stdout)?;
            }
            Report::Statuses(entries) => {
                for entry in entries {
                    write!(stdout, "{:>3}  ", entry.code)?;
                    let color = match entry.status {
                        Some(status) if status.is_ok() => Color::Green,
                        Some(_) => Color::Yellow,
                        None => Color::Red,
                    };
                    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
                    write!(stdout, "{}", entry.name)?;
                    stdout.reset()?;
                    writeln!(stdout)?;
                }
            }
            other => {
                write!(stdout, "{}", self.format(other))?;
            }
        }

        stdout.flush()
    }

    /// Write a failure to stderr in red
    pub fn write_failure_to_stderr(&self, failure: &Failure<'_>) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(self.color_choice);

        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(
            stderr,
            "Failed to {} ({})",
            failure.action,
            failure.error.status().name()
        )?;
        stderr.reset()?;
        writeln!(stderr, ": {}", failure.error)?;

        stderr.flush()
    }
}

fn describe_value(value: &TypedValue) -> String {
    match value {
        TypedValue::Double(v) => format!("You entered {:.6} (double)", v),
        TypedValue::Long(v) => format!("You entered {} (long)", v),
        TypedValue::UnsignedLong(v) => format!("You entered {} (unsigned long)", v),
    }
}

fn format_sizes(rows: &[ArraySize]) -> String {
    let labels: Vec<String> = rows
        .iter()
        .map(|row| format!("sizeof {} array", row.element))
        .collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    rows.iter()
        .zip(&labels)
        .map(|(row, label)| format!("{:>width$}: {} bytes\n", label, row.array_bytes))
        .collect()
}

fn format_status_line(entry: &StatusEntry) -> String {
    format!("{:>3}  {}\n", entry.code, entry.name)
}
