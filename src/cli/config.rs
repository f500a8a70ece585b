//! Configuration file for verchain
//!
//! The file is optional. Every field has a default, so `{}` is a valid
//! configuration and a missing `--config` behaves the same way.

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Branch label shown in commit and log output (default "master")
    #[serde(default = "default_branch_name")]
    pub branch_name: String,

    /// strftime pattern for commit dates, rendered in local time
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Lowest log severity written to stderr (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_branch_name() -> String {
    "master".to_string()
}
fn default_timestamp_format() -> String {
    "%a %b %e %H:%M:%S %Y".to_string()
} // ctime layout
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_name: default_branch_name(),
            timestamp_format: default_timestamp_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.branch_name.is_empty() || self.branch_name.chars().any(char::is_whitespace) {
            return Err(CliError::config_error(format!(
                "Invalid branch_name: '{}'. Must be non-empty with no whitespace.",
                self.branch_name
            )));
        }

        // chrono reports bad specifiers only when formatting, so reject them here
        if self.timestamp_format.is_empty()
            || StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error))
        {
            return Err(CliError::config_error(format!(
                "Invalid timestamp_format: '{}'",
                self.timestamp_format
            )));
        }

        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> Severity {
        self.log_level.parse().unwrap_or(Severity::Warn)
    }
}
