//! Print command implementation
//!
//! Loads the ignore rules once, then reads and prints every file argument
//! in command-line order.

use crate::cli::output::BlockPrinter;
use crate::config::Config;
use crate::domain::{FileBlock, PatternSet};
use crate::error::{AppError, Result};
use crate::services::PathFilter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Counts from one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintSummary {
    pub printed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Execute the print command against stdout and stderr
pub fn run_print(files: &[PathBuf], config: &Config) -> Result<()> {
    if files.is_empty() {
        return Err(AppError::MissingFiles);
    }

    let cwd = std::env::current_dir()?;
    let filter = build_filter(config, &cwd)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let printer = BlockPrinter::new(config.output.format, stdout.lock(), stderr.lock());

    let summary = print_files(files, &filter, printer)?;
    log::debug!(
        "Printed {} files ({} skipped, {} failed)",
        summary.printed,
        summary.skipped,
        summary.failed
    );

    Ok(())
}

/// Build the path filter described by the configuration
pub fn build_filter(config: &Config, cwd: &Path) -> Result<PathFilter> {
    let base_dir = match &config.ignore.base_dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    let patterns = if config.ignore.enabled {
        PatternSet::load(&base_dir, &config.ignore.file)?
    } else {
        log::debug!("Ignore rules disabled");
        PatternSet::empty()
    };

    Ok(PathFilter::new(patterns, &base_dir, cwd))
}

/// Filter, read and print each file in order
///
/// Read failures are reported by the printer and counted; only write
/// failures end the run early.
pub fn print_files<W: Write, E: Write>(
    files: &[PathBuf],
    filter: &PathFilter,
    mut printer: BlockPrinter<W, E>,
) -> io::Result<PrintSummary> {
    let mut summary = PrintSummary::default();

    for path in files {
        if filter.is_ignored(path) {
            log::debug!("Skipping ignored file {}", path.display());
            summary.skipped += 1;
            continue;
        }

        let block = FileBlock::load(path);
        if block.is_ok() {
            summary.printed += 1;
        } else {
            summary.failed += 1;
        }

        printer.print(block)?;
    }

    printer.finish()?;
    Ok(summary)
}
