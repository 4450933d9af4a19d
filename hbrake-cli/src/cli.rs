//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "hbrake: declarative HandBrakeCLI invocation",
    long_about = "Validates JSON encode configurations, compiles them into \
                  HandBrakeCLI commands, and runs the encode with progress reporting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates an encode configuration against the schema
    Validate(ValidateArgs),

    /// Compiles a configuration and prints the HandBrakeCLI command
    Compile(CompileArgs),

    /// Compiles a configuration and runs the encode
    Encode(EncodeArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// The encode configuration file (JSON)
    #[arg(short, long, required = true, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Optional: validate against this schema instead of the bundled one
    #[arg(long, value_name = "SCHEMA_FILE")]
    pub schema: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// The encode configuration file (JSON)
    #[arg(short, long, required = true, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Optional: validate against this schema instead of the bundled one
    #[arg(long, value_name = "SCHEMA_FILE")]
    pub schema: Option<PathBuf>,

    /// Optional: path to the HandBrakeCLI binary (defaults to a PATH lookup).
    /// Can also be set via the HBRAKE_HANDBRAKE environment variable.
    #[arg(long, value_name = "BINARY", env = "HBRAKE_HANDBRAKE")]
    pub handbrake: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// The encode configuration file (JSON)
    #[arg(short, long, required = true, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Optional: validate against this schema instead of the bundled one
    #[arg(long, value_name = "SCHEMA_FILE")]
    pub schema: Option<PathBuf>,

    /// Optional: path to the HandBrakeCLI binary (defaults to a PATH lookup).
    /// Can also be set via the HBRAKE_HANDBRAKE environment variable.
    #[arg(long, value_name = "BINARY", env = "HBRAKE_HANDBRAKE")]
    pub handbrake: Option<PathBuf>,

    /// Optional: directory for the run's log file (no file logging without it)
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list, for tests.
pub fn parse_cli_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(args)
}
