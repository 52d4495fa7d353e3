//! Configuration file parsing and validation

pub mod drills_toml;

pub use drills_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, ConfigError, DivideConfig, OutputConfig, OutputFormat,
    UniformConfig,
};
