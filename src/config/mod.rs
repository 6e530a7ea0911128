//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::args::OutputFormat;
use crate::domain::DEFAULT_IGNORE_FILE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Ignore-file settings
    pub ignore: IgnoreConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Check values that TOML alone cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        let file = self.ignore.file.as_str();

        if file.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "ignore.file".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if file.contains('/') || file.contains('\\') || file == "." || file == ".." {
            return Err(ConfigError::InvalidValue {
                key: "ignore.file".to_string(),
                message: format!("'{}' is not a bare file name", file),
            });
        }

        Ok(())
    }
}

/// General configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Ignore-file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Skip files matched by the ignore file
    pub enabled: bool,
    /// Name of the ignore file in the base directory
    pub file: String,
    /// Base directory; the working directory when unset
    pub base_dir: Option<PathBuf>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: DEFAULT_IGNORE_FILE.to_string(),
            base_dir: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert!(config.ignore.enabled);
        assert_eq!(config.ignore.file, ".gitignore");
        assert!(config.ignore.base_dir.is_none());
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.ignore.file, ".gitignore");
        assert!(config.ignore.enabled);
    }

    #[test]
    fn test_validate_rejects_bad_ignore_file() {
        let mut config = Config::default();
        config.ignore.file = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.ignore.file = "sub/.gitignore".to_string();
        assert!(config.validate().is_err());
    }
}
