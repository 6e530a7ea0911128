//! CLI argument definitions using clap derive

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Usage line printed when no file arguments are given
pub const USAGE: &str = "Usage: printmd FILE [FILE ...]";

/// Print files as Markdown code blocks
///
/// Each file is printed as a fenced block headed by its path. Files matched
/// by the `.gitignore` in the working directory are skipped.
#[derive(Parser, Debug)]
#[command(name = "printmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to print, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Name of the ignore file looked up in the base directory
    #[arg(long, value_name = "NAME")]
    pub ignore_file: Option<String>,

    /// Do not skip files matched by the ignore file
    #[arg(long)]
    pub no_ignore: bool,

    /// Directory holding the ignore file; paths are matched relative to it
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fenced Markdown blocks
    #[default]
    Markdown,
    /// A JSON array of path/content objects
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
