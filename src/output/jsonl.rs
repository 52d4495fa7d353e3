#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Every record is one JSON object on its own line with a `type` field.
//! Reports with several items (samples, sizes, statuses) emit one record
//! per item in input order.

use super::{Failure, Report};
use crate::parser::TypedValue;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a report as JSONL
    pub fn format(&self, report: &Report) -> String {
        let mut output = String::new();

        match report {
            Report::Quotient { fraction, value } => push_record(
                &mut output,
                &QuotientRecord {
                    record_type: "quotient",
                    numerator: fraction.numerator,
                    denominator: fraction.denominator,
                    value: finite_or_none(*value),
                    display: super::format_g(*value),
                },
            ),
            Report::Mean { count, value } => push_record(
                &mut output,
                &ScalarRecord {
                    record_type: "mean",
                    count: *count,
                    value: finite_or_none(*value),
                    display: super::format_g(*value),
                },
            ),
            Report::Maximum { count, value } => push_record(
                &mut output,
                &ScalarRecord {
                    record_type: "maximum",
                    count: *count,
                    value: finite_or_none(*value),
                    display: super::format_g(*value),
                },
            ),
            Report::Samples { low, high, values } => {
                for (index, value) in values.iter().enumerate() {
                    push_record(
                        &mut output,
                        &SampleRecord {
                            record_type: "sample",
                            index,
                            low: *low,
                            high: *high,
                            value: *value,
                        },
                    );
                }
            }
            Report::Value(value) => push_record(
                &mut output,
                &ValueRecord {
                    record_type: "value",
                    value_type: value.type_name(),
                    value: *value,
                },
            ),
            Report::Student { student, .. } => push_record(
                &mut output,
                &StudentRecord {
                    record_type: "student",
                    first_name: student.first_name(),
                    last_name: student.last_name(),
                },
            ),
            Report::Sizes(rows) => {
                for row in rows {
                    push_record(
                        &mut output,
                        &SizeRecord {
                            record_type: "size",
                            element: row.element,
                            element_bytes: row.element_bytes,
                            length: row.length,
                            array_bytes: row.array_bytes,
                        },
                    );
                }
            }
            Report::Statuses(entries) => {
                for entry in entries {
                    push_record(
                        &mut output,
                        &StatusRecord {
                            record_type: "status",
                            code: entry.code,
                            name: entry.name,
                            defined: entry.status.is_some(),
                        },
                    );
                }
            }
        }

        output
    }

    /// Format a failure as a single error record
    pub fn format_failure(&self, failure: &Failure<'_>) -> String {
        let mut output = String::new();
        let status = failure.error.status();
        push_record(
            &mut output,
            &ErrorRecord {
                record_type: "error",
                action: failure.action,
                code: status.code(),
                status: status.name(),
                message: failure.error.to_string(),
            },
        );
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// JSON has no infinities or NaN; such values are reported as null
fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Quotient record for JSONL output
#[derive(Debug, Serialize)]
struct QuotientRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    numerator: f64,
    denominator: f64,
    value: Option<f64>,
    display: String,
}

/// Mean or maximum record for JSONL output
#[derive(Debug, Serialize)]
struct ScalarRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    count: usize,
    value: Option<f64>,
    display: String,
}

#[derive(Debug, Serialize)]
struct SampleRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    low: f64,
    high: f64,
    value: f64,
}

#[derive(Debug, Serialize)]
struct ValueRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    value_type: &'static str,
    value: TypedValue,
}

#[derive(Debug, Serialize)]
struct StudentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SizeRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    element: &'static str,
    element_bytes: usize,
    length: usize,
    array_bytes: usize,
}

/// Status registry record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    code: i32,
    name: &'static str,
    defined: bool,
}

/// Error record for JSONL output
#[derive(Debug, Serialize)]
struct ErrorRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    action: &'a str,
    code: i32,
    status: &'static str,
    message: String,
}
