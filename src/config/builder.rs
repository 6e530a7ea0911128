//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; otherwise the default locations are
    /// searched and defaults are kept when none is usable.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.config.general.verbose = true;
        }
        self
    }

    /// Override with CLI output format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.output.format = f;
        }
        self
    }

    /// Override with CLI ignore file name
    pub fn with_ignore_file(mut self, file: Option<String>) -> Self {
        if let Some(f) = file {
            self.config.ignore.file = f;
        }
        self
    }

    /// Override with CLI --no-ignore flag
    pub fn with_no_ignore(mut self, no_ignore: bool) -> Self {
        if no_ignore {
            self.config.ignore.enabled = false;
        }
        self
    }

    /// Override with CLI base directory
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if let Some(d) = base_dir {
            self.config.ignore.base_dir = Some(d);
        }
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
