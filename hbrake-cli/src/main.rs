//! Main entry point for the hbrake CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the appropriate command handlers. Errors are printed to stderr; a
//! failed encode exits with the child process's status code.

use std::process;

use hbrake::error::CliResult;
use hbrake::logging::setup_logging;
use hbrake::{Commands, execute_compile, execute_encode, execute_validate, output, parse_cli};
use hbrake_core::CoreError;
use log::LevelFilter;

fn main() {
    let cli_args = parse_cli();

    let log_level = if cli_args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let result: CliResult<()> = match cli_args.command {
        Commands::Validate(args) => {
            setup_logging(log_level, None).and_then(|_| execute_validate(args))
        }
        Commands::Compile(args) => {
            setup_logging(log_level, None).and_then(|_| execute_compile(args))
        }
        Commands::Encode(args) => setup_logging(log_level, args.log_dir.as_deref())
            .and_then(|log_path| {
                if let Some(path) = &log_path {
                    log::info!("Logging this run to {}", path.display());
                }
                execute_encode(args)
            }),
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        // A failed encode propagates the tool's own exit code.
        let code = match &err {
            CoreError::CommandFailed { status, .. } => status.code().unwrap_or(1),
            _ => 1,
        };
        process::exit(code);
    }
}
