//! Logging setup and helpers.
//!
//! Log lines go to stderr so that stdout stays reserved for command output
//! (the `compile` subcommand prints the compiled command there). The
//! `encode` subcommand can additionally mirror all lines into a timestamped
//! file under a chosen log directory.

use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::{CliErrorContext, CliResult};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used for unique log file names (e.g. "hbrake_encode_run_20240601_123045.log").
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Initializes the global logger.
///
/// Returns the path of the created log file when `log_dir` is given. Must
/// be called at most once per process.
pub fn setup_logging(level: LevelFilter, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    let mut log_path = None;
    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)
            .cli_context(format!("Failed to create log directory {}", dir.display()))?;
        let path = dir.join(format!("hbrake_encode_run_{}.log", get_timestamp()));
        let file = fern::log_file(&path)
            .cli_context(format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
        log_path = Some(path);
    }

    dispatch
        .apply()
        .cli_context("Failed to initialize logging")?;
    Ok(log_path)
}
