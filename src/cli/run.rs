#![forbid(unsafe_code)]

//! Command execution
//!
//! Every command resolves to a [`Report`] or an [`Error`]. The runner
//! renders either one in the configured format and turns it into an exit
//! code; any failure is terminal for the invocation.

use super::args::{Cli, Command};
use crate::config::{Config, OutputFormat};
use crate::numeric;
use crate::output::{Failure, HumanFormatter, JsonlFormatter, Report, StatusEntry};
use crate::parser::{self, Convention, TypedValue, parse_f64};
use crate::sizes;
use crate::status::{Error, Result, StatusCode};
use crate::strings::strip_newline;
use crate::student::Student;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Exit codes for the command runner
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Input value that makes `read` take a line from stdin
const STDIN_MARKER: &str = "-";

/// Run a parsed command line and return the process exit code
///
/// Configuration is looked up relative to the working directory.
pub fn run(cli: Cli) -> i32 {
    let dir = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_in(cli, &dir, &mut input)
}

/// Run a parsed command line against an explicit directory and input
pub fn run_in(cli: Cli, dir: &Path, input: &mut dyn BufRead) -> i32 {
    let config = match Config::discover(dir, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return EXIT_ERROR;
        }
    };

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let color = cli
        .color
        .map(crate::config::ColorOption::from)
        .unwrap_or(config.output.color)
        .to_color_choice();

    match execute(&cli.command, &config, input) {
        Ok(report) => match write_report(&report, format, color) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Failed to write output: {}", e);
                EXIT_ERROR
            }
        },
        Err(error) => {
            let failure = Failure {
                action: action_name(&cli.command),
                error: &error,
            };
            if let Err(e) = write_failure(&failure, format, color) {
                eprintln!("Failed to write output: {}", e);
            }
            EXIT_ERROR
        }
    }
}

/// Execute one command and produce its report
pub fn execute(command: &Command, config: &Config, input: &mut dyn BufRead) -> Result<Report> {
    match command {
        Command::Divide { convention, args } => {
            let convention = convention
                .map(Convention::from)
                .unwrap_or(config.divide.convention);
            let fraction = parser::parse_arguments(convention, Some(args.as_slice()))?;
            Ok(Report::Quotient {
                fraction,
                value: fraction.quotient(),
            })
        }
        Command::Mean { values } => {
            let values = parse_values(values)?;
            let value = numeric::mean(Some(values.as_slice()))?;
            Ok(Report::Mean {
                count: values.len(),
                value,
            })
        }
        Command::Max { values } => {
            let values = parse_values(values)?;
            let value = numeric::maximum(&values)?;
            Ok(Report::Maximum {
                count: values.len(),
                value,
            })
        }
        Command::Uniform {
            count,
            low,
            high,
            seed,
        } => {
            let count = count.unwrap_or(config.uniform.count);
            let low = low.unwrap_or(config.uniform.low);
            let high = high.unwrap_or(config.uniform.high);
            let mut rng = match seed.or(config.uniform.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let values = numeric::uniform(count, low, high, &mut rng)?;
            Ok(Report::Samples { low, high, values })
        }
        Command::Read { input: value } => {
            let line = if value == STDIN_MARKER {
                read_line(input)?
            } else {
                value.clone()
            };
            Ok(Report::Value(TypedValue::parse(&line)?))
        }
        Command::Student {
            first_name,
            last_name,
            csv,
        } => Ok(Report::Student {
            student: Student::new(first_name, last_name)?,
            csv: *csv,
        }),
        Command::Sizes { length } => {
            let rows = match length {
                None => sizes::array_sizes::<{ sizes::DEFAULT_LENGTH }>(),
                Some(length) => sizes::array_sizes_for(*length).ok_or_else(|| {
                    Error::InvalidArg(format!("array length {} is too large", length))
                })?,
            };
            Ok(Report::Sizes(rows))
        }
        Command::Status { codes } => {
            let entries = if codes.is_empty() {
                StatusCode::ALL
                    .iter()
                    .map(|status| StatusEntry::lookup(status.code()))
                    .collect()
            } else {
                codes.iter().map(|code| StatusEntry::lookup(*code)).collect()
            };
            Ok(Report::Statuses(entries))
        }
    }
}

/// What a command attempts, for failure messages
fn action_name(command: &Command) -> &'static str {
    match command {
        Command::Divide { .. } => "parse arguments",
        Command::Mean { .. } => "compute mean",
        Command::Max { .. } => "compute maximum",
        Command::Uniform { .. } => "draw samples",
        Command::Read { .. } => "read value",
        Command::Student { .. } => "create student",
        Command::Sizes { .. } => "compute sizes",
        Command::Status { .. } => "look up status",
    }
}

fn parse_values(tokens: &[String]) -> Result<Vec<f64>> {
    tokens.iter().map(|token| parse_f64(token)).collect()
}

fn read_line(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::Unknown(format!("failed to read from stdin: {}", e)))?;
    if read == 0 {
        return Err(Error::InvalidArg("no value was entered".to_string()));
    }
    strip_newline(&mut line);
    Ok(line)
}

fn write_report(
    report: &Report,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => HumanFormatter::new(color).write_to_stdout(report),
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(report).as_bytes())?;
            stdout.flush()
        }
    }
}

fn write_failure(
    failure: &Failure<'_>,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> io::Result<()> {
    log::debug!("{} failed with {}", failure.action, failure.error.status());
    match format {
        OutputFormat::Human => HumanFormatter::new(color).write_failure_to_stderr(failure),
        OutputFormat::Jsonl => {
            let mut stderr = io::stderr().lock();
            stderr.write_all(JsonlFormatter::new().format_failure(failure).as_bytes())?;
            stderr.flush()
        }
    }
}
