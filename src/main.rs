//! printmd - print files as Markdown code blocks
//!
//! Prints each file argument inside a fenced block headed by its path,
//! skipping files matched by the `.gitignore` in the working directory.

use clap::Parser;
use printmd::cli::args::{generate_completions, Cli, USAGE};
use printmd::commands::run_print;
use printmd::config::ConfigBuilder;
use printmd::error::AppError;

fn main() {
    // Initialize logging; the global max level gates output until -v raises it
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("printmd", log::LevelFilter::Debug)
        .parse_default_env()
        .format_timestamp(None)
        .init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(log::LevelFilter::Warn);
    }

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    if let Err(e) = run(&cli) {
        log::debug!("{:?}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    // No file I/O at all before the argument check
    if cli.files.is_empty() {
        return Err(AppError::MissingFiles);
    }

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose)
        .with_format(cli.format)
        .with_ignore_file(cli.ignore_file.clone())
        .with_no_ignore(cli.no_ignore)
        .with_base_dir(cli.base_dir.clone())
        .build()?;

    if config.general.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    run_print(&cli.files, &config)
}

fn print_error(err: &AppError) {
    match err {
        AppError::MissingFiles => eprintln!("{}", USAGE),
        AppError::Ignore(_) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("Hint: Fix the ignore file or rerun with --no-ignore.");
        }
        _ => eprintln!("Error: {}", err),
    }
}
