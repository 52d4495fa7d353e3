#![forbid(unsafe_code)]

//! Command-line argument definitions

use crate::config;
use crate::parser::Convention;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Small command-line drills: fractions, means, samples, strings and records
#[derive(Parser, Debug)]
#[command(name = "drills", author, version, about)]
pub struct Cli {
    /// Path to a drills.toml file (defaults to ./drills.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors in human output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a numerator and denominator and print their quotient
    Divide {
        /// Token convention for the numerator and denominator
        #[arg(long, value_enum, value_name = "CONVENTION")]
        convention: Option<ConventionArg>,

        /// Raw tokens, e.g. `10 4`, `--numerador 10 --denominador 4` or `-n 10 -d 4`
        ///
        /// Everything after `divide` is taken as a token, so global options
        /// such as `--format` must come before the subcommand.
        #[arg(
            value_name = "ARGS",
            num_args = 0..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// Print the arithmetic mean of the given numbers
    Mean {
        #[arg(value_name = "VALUES", num_args = 0.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print the largest of the given numbers
    Max {
        #[arg(value_name = "VALUES", num_args = 0.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Draw samples uniformly from [low, high]
    Uniform {
        /// Number of samples
        #[arg(long, value_name = "N")]
        count: Option<usize>,

        /// Lower bound
        #[arg(long, value_name = "A", allow_negative_numbers = true)]
        low: Option<f64>,

        /// Upper bound
        #[arg(long, value_name = "B", allow_negative_numbers = true)]
        high: Option<f64>,

        /// Seed for reproducible samples
        #[arg(long, value_name = "S")]
        seed: Option<u64>,
    },

    /// Read a tagged value: d<float>, l<integer> or u<integer>; `-` reads a line from stdin
    Read {
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
    },

    /// Print a student record
    Student {
        first_name: String,
        last_name: String,

        /// Print as one CSV row
        #[arg(long)]
        csv: bool,
    },

    /// Print the byte size of arrays of common element types
    Sizes {
        /// Array length
        #[arg(long, value_name = "N")]
        length: Option<usize>,
    },

    /// Look up status code names; with no codes, list every defined code
    Status {
        #[arg(value_name = "CODE", num_args = 0.., allow_negative_numbers = true)]
        codes: Vec<i32>,
    },
}

/// Token convention as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionArg {
    Positional,
    Long,
    Short,
}

impl From<ConventionArg> for Convention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Positional => Convention::Positional,
            ConventionArg::Long => Convention::Long,
            ConventionArg::Short => Convention::Short,
        }
    }
}

/// Output format as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Jsonl,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Jsonl => config::OutputFormat::Jsonl,
        }
    }
}

/// Color choice as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_divide_collects_flag_tokens() {
        let cli = Cli::try_parse_from(["drills", "divide", "-n", "10", "-d", "4"]).unwrap();
        match cli.command {
            Command::Divide { convention, args } => {
                assert_eq!(convention, None);
                assert_eq!(args, vec!["-n", "10", "-d", "4"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_divide_convention_then_long_tokens() {
        let cli = Cli::try_parse_from([
            "drills",
            "divide",
            "--convention",
            "long",
            "--numerador",
            "10",
            "--denominador",
            "4",
        ])
        .unwrap();
        match cli.command {
            Command::Divide { convention, args } => {
                assert_eq!(convention, Some(ConventionArg::Long));
                assert_eq!(args.len(), 4);
                assert_eq!(args[0], "--numerador");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["drills", "sizes", "--format", "jsonl"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));
    }

    #[test]
    fn test_status_accepts_negative_codes() {
        let cli = Cli::try_parse_from(["drills", "status", "-1", "3"]).unwrap();
        match cli.command {
            Command::Status { codes } => assert_eq!(codes, vec![-1, 3]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_convention_conversion() {
        assert_eq!(
            Convention::from(ConventionArg::Positional),
            Convention::Positional
        );
        assert_eq!(Convention::from(ConventionArg::Short), Convention::Short);
    }
}
