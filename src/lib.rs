//! printmd - print files as Markdown code blocks
//!
//! This library provides the pieces behind the `printmd` binary: loading
//! `.gitignore` rules, filtering file arguments, and rendering each file as a
//! fenced Markdown block.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output rendering
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: File blocks and ignore-pattern sets
//! - [`error`]: Error types
//! - [`services`]: Path filtering

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AppError, Result};
