#![forbid(unsafe_code)]

//! `drills.toml` configuration
//!
//! Every section and key is optional; missing values fall back to defaults.
//! Unknown keys are rejected so typos surface early.

use crate::parser::Convention;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "drills.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but make no sense together
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub divide: DivideConfig,
    pub output: OutputConfig,
    pub uniform: UniformConfig,
}

/// `[divide]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DivideConfig {
    pub convention: Convention,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorOption,
}

/// `[uniform]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniformConfig {
    pub count: usize,
    pub low: f64,
    pub high: f64,
    pub seed: Option<u64>,
}

impl Default for UniformConfig {
    fn default() -> Self {
        UniformConfig {
            count: 10,
            low: 0.0,
            high: 1.0,
            seed: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

/// When to colorize human output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// termcolor setting for this option
    pub fn to_color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl Config {
    /// Parses and validates TOML text
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the file at `path`
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Resolves the configuration for a run
    ///
    /// An explicit path must exist. Otherwise `drills.toml` in `dir` is used
    /// when present, and defaults when it is not.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            log::info!("loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::info!("loading config from {}", candidate.display());
            Self::load(&candidate)
        } else {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Config::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let UniformConfig { low, high, .. } = self.uniform;
        if !low.is_finite() || !high.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "uniform bounds must be finite, got [{}, {}]",
                low, high
            )));
        }
        if low > high {
            return Err(ConfigError::Invalid(format!(
                "uniform.low ({}) is above uniform.high ({})",
                low, high
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.divide.convention, Convention::Short);
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.uniform.count, 10);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
[divide]
convention = "positional"

[output]
format = "jsonl"
color = "never"

[uniform]
count = 3
low = -1.0
high = 1.0
seed = 42
"#,
        )
        .unwrap();

        assert_eq!(config.divide.convention, Convention::Positional);
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.color, ColorOption::Never);
        assert_eq!(config.uniform.count, 3);
        assert_eq!(config.uniform.low, -1.0);
        assert_eq!(config.uniform.seed, Some(42));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::parse("[uniform]\nhigh = 5.0\n").unwrap();
        assert_eq!(config.uniform.low, 0.0);
        assert_eq!(config.uniform.high, 5.0);
        assert_eq!(config.uniform.count, 10);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("[divide]\nstyle = \"long\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_convention_rejected() {
        assert!(Config::parse("[divide]\nconvention = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Config::parse("[uniform]\nlow = 2.0\nhigh = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_discover_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::discover(temp_dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_finds_file_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[divide]\nconvention = \"long\"\n",
        )
        .unwrap();

        let config = Config::discover(temp_dir.path(), None).unwrap();
        assert_eq!(config.divide.convention, Convention::Long);
    }

    #[test]
    fn test_discover_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let err = Config::discover(temp_dir.path(), Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_color_choice_mapping() {
        assert_eq!(
            ColorOption::Never.to_color_choice(),
            termcolor::ColorChoice::Never
        );
        assert_eq!(
            ColorOption::Always.to_color_choice(),
            termcolor::ColorChoice::Always
        );
    }
}
