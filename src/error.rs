//! Unified error types for printmd
//!
//! Fatal errors abort the run from `main`; per-file read failures never
//! become an `AppError` and are reported inline by the renderer instead.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// No file arguments were given
    #[error("no input files given")]
    MissingFiles,

    /// Error loading the ignore-pattern file
    #[error("Ignore file error: {0}")]
    Ignore(#[from] IgnoreError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (working directory lookup, writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading a `.gitignore`-style pattern file
#[derive(Error, Debug)]
pub enum IgnoreError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("failed to decode {path}: file is not valid UTF-8")]
    Decode { path: String },

    /// The compiled rule set could not be built
    #[error("failed to compile rules from {path}: {source}")]
    Build {
        path: String,
        #[source]
        source: ignore::Error,
    },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
