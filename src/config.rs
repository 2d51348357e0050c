//! Configuration management for the filesystem simulator
//!
//! Values come from built-in defaults, then an optional `fs-simulator.toml`
//! in the working directory, then `FS_SIM_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::storage::MAX_DIRECTORY_DEPTH;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "fs-simulator";

/// Prefix for environment overrides, e.g. `FS_SIM_MAX_DIRECTORY_DEPTH`
pub const ENV_PREFIX: &str = "FS_SIM";

const DEFAULT_PROMPT_SYMBOL: &str = "$";
const DEFAULT_MAX_COMMAND_LENGTH: usize = 512;
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Complete simulator configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Symbol printed after the current path in the prompt
    pub prompt_symbol: String,

    /// Print the welcome banner when the shell starts
    pub show_banner: bool,

    /// Longest accepted input line, in bytes
    pub max_command_length: usize,

    /// How deep directories may be nested below the root
    pub max_directory_depth: usize,

    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            prompt_symbol: DEFAULT_PROMPT_SYMBOL.to_string(),
            show_banner: true,
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
            max_directory_depth: MAX_DIRECTORY_DEPTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from defaults, file and environment
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("prompt_symbol", DEFAULT_PROMPT_SYMBOL)?
            .set_default("show_banner", true)?
            .set_default("max_command_length", DEFAULT_MAX_COMMAND_LENGTH as i64)?
            .set_default("max_directory_depth", MAX_DIRECTORY_DEPTH as i64)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: SimulatorConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt_symbol.trim().is_empty() {
            return Err(ConfigError::Message(
                "prompt_symbol cannot be empty".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.max_directory_depth == 0 {
            return Err(ConfigError::Message(
                "max_directory_depth must be greater than 0".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Message(format!(
                "log_level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }
}
